// src/types.rs

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Result state of a stage, as reported by the upstream pipeline run.
///
/// Upstream values are free-form strings. Anything outside the known set is
/// kept as `Unrecognized` rather than rejected, and renders unstyled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum StageState {
    Success,
    Failure,
    Running,
    Queued,
    Unstable,
    Aborted,
    #[default]
    NotBuilt,
    Skipped,
    Paused,
    Unknown,
    /// Upstream value we do not know about (e.g. `"this is not my office"`).
    Unrecognized(String),
}

impl StageState {
    /// Wire representation, as the upstream service spells it.
    pub fn as_str(&self) -> &str {
        match self {
            StageState::Success => "success",
            StageState::Failure => "failure",
            StageState::Running => "running",
            StageState::Queued => "queued",
            StageState::Unstable => "unstable",
            StageState::Aborted => "aborted",
            StageState::NotBuilt => "not_built",
            StageState::Skipped => "skipped",
            StageState::Paused => "paused",
            StageState::Unknown => "unknown",
            StageState::Unrecognized(raw) => raw.as_str(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, StageState::Unrecognized(_))
    }

    /// Whether a `complete_percent` value is meaningful for this state.
    pub fn shows_progress(&self) -> bool {
        matches!(self, StageState::Running)
    }
}

impl FromStr for StageState {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let state = match s.trim().to_lowercase().as_str() {
            "success" => StageState::Success,
            "failure" => StageState::Failure,
            "running" => StageState::Running,
            "queued" => StageState::Queued,
            "unstable" => StageState::Unstable,
            "aborted" => StageState::Aborted,
            "not_built" | "not-built" | "notbuilt" => StageState::NotBuilt,
            "skipped" => StageState::Skipped,
            "paused" => StageState::Paused,
            "unknown" => StageState::Unknown,
            _ => StageState::Unrecognized(s.to_string()),
        };
        Ok(state)
    }
}

impl From<&str> for StageState {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(state) => state,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for StageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StageState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StageState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(StageState::from(raw.as_str()))
    }
}

/// Where a node's label is drawn relative to the node glyph.
///
/// Top-level stages carry their label above the row; branch nodes carry a
/// smaller label underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPlacement {
    Above,
    Below,
}

/// Output format for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

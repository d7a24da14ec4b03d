// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::layout::Point;
use crate::types::OutputFormat;

/// Command-line arguments for `pipeline-layout`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pipeline-layout",
    version,
    about = "Lay out a pipeline's stage tree as positioned nodes and connector paths.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the stage data (JSON).
    ///
    /// Either a nested array of stages, or a flat
    /// `{ "stages": [...], "roots": [...] }` graph.
    #[arg(long, value_name = "PATH")]
    pub input: String,

    /// Path to a layout config file (TOML). Defaults apply when omitted.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Stage id to render as selected.
    #[arg(long, value_name = "ID")]
    pub select: Option<u32>,

    /// Resolve a pointer position (`X,Y`) to the stage under it.
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    pub hit: Option<Point>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PIPELINE_LAYOUT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the normalized stage tree, but don't lay it out.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("invalid x {x:?}: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("invalid y {y:?}: {e}"))?;
    Ok(Point::new(x, y))
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

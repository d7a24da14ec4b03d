// src/config/model.rs

use serde::{Deserialize, Serialize};

/// Hard ceiling for `max_depth`. Normalization, measuring and routing
/// recurse once per nesting level, so deeper trees are rejected outright.
pub const MAX_DEPTH_LIMIT: usize = 256;

/// Layout configuration as read from a TOML file (or passed as a partial
/// override object by a caller).
///
/// ```toml
/// node_spacing_h = 90
/// parallel_spacing_h = 100
/// connector_stroke_width = 10
/// node_radius = 20
/// curve_radius = 10
/// ```
///
/// Every field is optional; anything left out falls back to
/// [`LayoutConfig::default`]. The camelCase names used by the dashboard
/// (`nodeSpacingH`, `curveRadius`, ...) are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawLayoutConfig {
    /// Horizontal gap between top-level stages.
    #[serde(default, alias = "nodeSpacingH")]
    pub node_spacing_h: Option<f64>,

    /// Vertical gap between stacked parallel branches.
    #[serde(default, alias = "parallelSpacingH")]
    pub parallel_spacing_h: Option<f64>,

    #[serde(default, alias = "nodeRadius")]
    pub node_radius: Option<f64>,

    /// Radius of the start/end terminal dots.
    #[serde(default, alias = "terminalRadius")]
    pub terminal_radius: Option<f64>,

    #[serde(default, alias = "curveRadius")]
    pub curve_radius: Option<f64>,

    #[serde(default, alias = "connectorStrokeWidth")]
    pub connector_stroke_width: Option<f64>,

    /// Distance from a top-level node's center to its label baseline.
    #[serde(default, alias = "labelOffsetV")]
    pub label_offset_v: Option<f64>,

    /// Distance from a branch node's center to its (smaller) label.
    #[serde(default, alias = "smallLabelOffsetV")]
    pub small_label_offset_v: Option<f64>,

    /// Y coordinate of the top-level row.
    #[serde(default, alias = "ypStart")]
    pub y_start: Option<f64>,

    /// Average advance of one label column, used to estimate label widths.
    #[serde(default, alias = "labelCharWidth")]
    pub label_char_width: Option<f64>,

    /// Extra pointer tolerance around each node for hit testing.
    #[serde(default, alias = "hitSlop")]
    pub hit_slop: Option<f64>,

    /// Maximum nesting depth of parallel groups before the tree is rejected.
    #[serde(default, alias = "maxDepth")]
    pub max_depth: Option<usize>,
}

/// Validated layout configuration.
///
/// Obtained from a [`RawLayoutConfig`] via `TryFrom` (see
/// `config::validate`), or from [`LayoutConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutConfig {
    pub node_spacing_h: f64,
    pub parallel_spacing_h: f64,
    pub node_radius: f64,
    pub terminal_radius: f64,
    pub curve_radius: f64,
    pub connector_stroke_width: f64,
    pub label_offset_v: f64,
    pub small_label_offset_v: f64,
    pub y_start: f64,
    pub label_char_width: f64,
    pub hit_slop: f64,
    pub max_depth: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_spacing_h: 120.0,
            parallel_spacing_h: 120.0,
            node_radius: 12.0,
            terminal_radius: 7.0,
            curve_radius: 12.0,
            connector_stroke_width: 3.5,
            label_offset_v: 20.0,
            small_label_offset_v: 15.0,
            y_start: 55.0,
            label_char_width: 7.0,
            hit_slop: 4.0,
            max_depth: 64,
        }
    }
}

impl LayoutConfig {
    /// Merge a partial config over the defaults without validating it.
    ///
    /// Callers outside this module should go through `TryFrom`.
    pub(crate) fn merged_unchecked(raw: &RawLayoutConfig) -> Self {
        let d = Self::default();
        Self {
            node_spacing_h: raw.node_spacing_h.unwrap_or(d.node_spacing_h),
            parallel_spacing_h: raw.parallel_spacing_h.unwrap_or(d.parallel_spacing_h),
            node_radius: raw.node_radius.unwrap_or(d.node_radius),
            terminal_radius: raw.terminal_radius.unwrap_or(d.terminal_radius),
            curve_radius: raw.curve_radius.unwrap_or(d.curve_radius),
            connector_stroke_width: raw
                .connector_stroke_width
                .unwrap_or(d.connector_stroke_width),
            label_offset_v: raw.label_offset_v.unwrap_or(d.label_offset_v),
            small_label_offset_v: raw.small_label_offset_v.unwrap_or(d.small_label_offset_v),
            y_start: raw.y_start.unwrap_or(d.y_start),
            label_char_width: raw.label_char_width.unwrap_or(d.label_char_width),
            hit_slop: raw.hit_slop.unwrap_or(d.hit_slop),
            max_depth: raw.max_depth.unwrap_or(d.max_depth),
        }
    }
}

// src/config/validate.rs

use crate::config::model::{LayoutConfig, RawLayoutConfig, MAX_DEPTH_LIMIT};
use crate::errors::{LayoutError, Result};

impl TryFrom<RawLayoutConfig> for LayoutConfig {
    type Error = crate::errors::LayoutError;

    fn try_from(raw: RawLayoutConfig) -> std::result::Result<Self, Self::Error> {
        let cfg = LayoutConfig::merged_unchecked(&raw);
        validate_config(&cfg)?;
        Ok(cfg)
    }
}

/// Check the invariants the solver and router rely on.
pub fn validate_config(cfg: &LayoutConfig) -> Result<()> {
    ensure_finite(cfg)?;
    validate_spacing(cfg)?;
    validate_radii(cfg)?;
    validate_limits(cfg)?;
    Ok(())
}

fn fields(cfg: &LayoutConfig) -> [(&'static str, f64); 11] {
    [
        ("node_spacing_h", cfg.node_spacing_h),
        ("parallel_spacing_h", cfg.parallel_spacing_h),
        ("node_radius", cfg.node_radius),
        ("terminal_radius", cfg.terminal_radius),
        ("curve_radius", cfg.curve_radius),
        ("connector_stroke_width", cfg.connector_stroke_width),
        ("label_offset_v", cfg.label_offset_v),
        ("small_label_offset_v", cfg.small_label_offset_v),
        ("y_start", cfg.y_start),
        ("label_char_width", cfg.label_char_width),
        ("hit_slop", cfg.hit_slop),
    ]
}

fn ensure_finite(cfg: &LayoutConfig) -> Result<()> {
    for (name, value) in fields(cfg) {
        if !value.is_finite() {
            return Err(LayoutError::ConfigError(format!(
                "`{name}` must be a finite number (got {value})"
            )));
        }
    }
    Ok(())
}

fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value <= 0.0 {
        return Err(LayoutError::ConfigError(format!(
            "`{name}` must be > 0 (got {value})"
        )));
    }
    Ok(())
}

fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if value < 0.0 {
        return Err(LayoutError::ConfigError(format!(
            "`{name}` must be >= 0 (got {value})"
        )));
    }
    Ok(())
}

fn validate_spacing(cfg: &LayoutConfig) -> Result<()> {
    ensure_positive("node_spacing_h", cfg.node_spacing_h)?;
    ensure_positive("parallel_spacing_h", cfg.parallel_spacing_h)?;
    ensure_positive("label_char_width", cfg.label_char_width)?;
    ensure_non_negative("label_offset_v", cfg.label_offset_v)?;
    ensure_non_negative("small_label_offset_v", cfg.small_label_offset_v)?;
    ensure_non_negative("y_start", cfg.y_start)?;
    Ok(())
}

fn validate_radii(cfg: &LayoutConfig) -> Result<()> {
    ensure_positive("node_radius", cfg.node_radius)?;
    ensure_positive("terminal_radius", cfg.terminal_radius)?;
    ensure_non_negative("curve_radius", cfg.curve_radius)?;
    ensure_non_negative("connector_stroke_width", cfg.connector_stroke_width)?;
    ensure_non_negative("hit_slop", cfg.hit_slop)?;

    // A bend needs room on both sides of its column within one slot.
    if cfg.curve_radius > cfg.node_spacing_h / 2.0 {
        return Err(LayoutError::ConfigError(format!(
            "`curve_radius` ({}) may not exceed half of `node_spacing_h` ({})",
            cfg.curve_radius, cfg.node_spacing_h
        )));
    }

    // Terminal dots sit in the half slot before the first and after the
    // last stage.
    if cfg.terminal_radius > cfg.node_spacing_h / 2.0 {
        return Err(LayoutError::ConfigError(format!(
            "`terminal_radius` ({}) may not exceed half of `node_spacing_h` ({})",
            cfg.terminal_radius, cfg.node_spacing_h
        )));
    }

    // Stacked branch rows are at least `parallel_spacing_h` apart.
    if cfg.parallel_spacing_h < 2.0 * cfg.node_radius {
        return Err(LayoutError::ConfigError(format!(
            "`parallel_spacing_h` ({}) must be at least twice `node_radius` ({})",
            cfg.parallel_spacing_h, cfg.node_radius
        )));
    }
    Ok(())
}

fn validate_limits(cfg: &LayoutConfig) -> Result<()> {
    if cfg.max_depth == 0 {
        return Err(LayoutError::ConfigError(
            "`max_depth` must be >= 1 (got 0)".to_string(),
        ));
    }
    if cfg.max_depth > MAX_DEPTH_LIMIT {
        return Err(LayoutError::ConfigError(format!(
            "`max_depth` must be <= {MAX_DEPTH_LIMIT} (got {})",
            cfg.max_depth
        )));
    }
    Ok(())
}

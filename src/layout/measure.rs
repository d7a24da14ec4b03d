// src/layout/measure.rs

//! Bottom-up measurement of slots and parallel bands.

use std::collections::HashMap;

use unicode_width::UnicodeWidthStr;

use crate::config::{LayoutConfig, MAX_DEPTH_LIMIT};
use crate::errors::{Result, StructuralError};
use crate::model::tree::Sequence;
use crate::model::NodeId;

/// Estimated rendered width of a label.
pub fn label_width(text: &str, cfg: &LayoutConfig) -> f64 {
    UnicodeWidthStr::width(text) as f64 * cfg.label_char_width
}

/// Horizontal room one stage needs: the configured spacing, widened for
/// labels that would not fit between two nodes.
pub fn slot_width(name: &str, cfg: &LayoutConfig) -> f64 {
    let label = label_width(name, cfg) + 2.0 * cfg.node_radius;
    cfg.node_spacing_h.max(label)
}

/// One aligned column of a band. Every branch's `i`-th stage is centered in
/// `slot`; a parallel stage's own band follows in `nested`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Column {
    pub slot: f64,
    pub nested: f64,
}

impl Column {
    pub fn width(&self) -> f64 {
        self.slot + self.nested
    }
}

/// Size of a set of stacked branches.
///
/// The top-level row is measured as a band with a single branch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BandMetrics {
    pub columns: Vec<Column>,
    /// Per branch: how far its nested content reaches below its own row.
    pub lane_extents: Vec<f64>,
    pub width: f64,
    /// Distance from the first branch's row to the last branch's deepest row.
    pub height: f64,
}

/// Measurements for every band in a tree, keyed by the stage that opens it.
#[derive(Debug, Default)]
pub struct Measurements {
    pub top: BandMetrics,
    pub bands: HashMap<NodeId, BandMetrics>,
}

impl Measurements {
    pub fn band(&self, owner: NodeId) -> Option<&BandMetrics> {
        self.bands.get(&owner)
    }
}

/// Measure a whole tree, rejecting nesting deeper than `cfg.max_depth`.
pub fn measure(top: &Sequence, cfg: &LayoutConfig) -> Result<Measurements> {
    let mut bands = HashMap::new();
    let top_metrics = measure_band(std::slice::from_ref(top), 0, cfg, &mut bands)?;
    Ok(Measurements {
        top: top_metrics,
        bands,
    })
}

fn measure_band(
    lanes: &[Sequence],
    depth: usize,
    cfg: &LayoutConfig,
    bands: &mut HashMap<NodeId, BandMetrics>,
) -> Result<BandMetrics> {
    let column_count = lanes.iter().map(Sequence::len).max().unwrap_or(0);
    let mut columns = vec![Column::default(); column_count];
    let mut lane_extents = Vec::with_capacity(lanes.len());

    for lane in lanes {
        let mut extent: f64 = 0.0;
        for (i, stage) in lane.stages.iter().enumerate() {
            columns[i].slot = columns[i].slot.max(slot_width(&stage.name, cfg));

            if stage.is_parallel() {
                let limit = cfg.max_depth.min(MAX_DEPTH_LIMIT);
                if depth >= limit {
                    return Err(StructuralError::TooDeep {
                        id: stage.id,
                        limit,
                    }
                    .into());
                }
                let nested = measure_band(&stage.branches, depth + 1, cfg, bands)?;
                columns[i].nested = columns[i].nested.max(nested.width);
                extent = extent.max(nested.height);
                bands.insert(stage.id, nested);
            }
        }
        lane_extents.push(extent);
    }

    let width = columns.iter().map(Column::width).sum();
    let gaps = lanes.len().saturating_sub(1) as f64 * cfg.parallel_spacing_h;
    let height = lane_extents.iter().sum::<f64>() + gaps;

    Ok(BandMetrics {
        columns,
        lane_extents,
        width,
        height,
    })
}

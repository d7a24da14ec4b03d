// src/layout/solver.rs

//! Coordinate assignment.
//!
//! Top-level stages run left to right along `y_start`. A parallel stage is
//! drawn as a node followed by its band: branch 0 continues on the stage's
//! own row, every later branch sits `parallel_spacing_h` below the deepest
//! row of the branch above it. Within a band, the `i`-th stage of every
//! branch shares column `i`, so ragged branches leave a gap at their end
//! rather than collapsing the band.

use std::collections::HashSet;

use tracing::debug;

use crate::config::LayoutConfig;
use crate::errors::{Result, StructuralError};
use crate::layout::measure::{label_width, measure, BandMetrics, Measurements};
use crate::layout::{GraphLayout, Label, Point, PositionedNode, Terminal};
use crate::model::tree::{Sequence, Stage, StageTree};
use crate::model::NodeId;
use crate::route::route;
use crate::types::LabelPlacement;

/// Lay out a normalized tree.
///
/// Either every stage is positioned and every connector routed, or an error
/// is returned; there is no partial result. An empty tree yields an empty
/// layout.
pub fn solve(tree: &StageTree, cfg: &LayoutConfig) -> Result<GraphLayout> {
    if tree.is_empty() {
        debug!("empty stage tree; nothing to lay out");
        return Ok(GraphLayout::default());
    }

    ensure_unique_ids(tree)?;
    let measurements = measure(&tree.stages, cfg)?;

    let start_x = cfg.node_spacing_h / 2.0;
    let row_y = cfg.y_start;
    let first_slot_x = start_x + cfg.node_spacing_h / 2.0;

    let mut placer = Placer {
        cfg,
        measurements: &measurements,
        nodes: Vec::with_capacity(tree.len()),
    };
    placer.place_lane(&tree.stages, &measurements.top, first_slot_x, row_y, Placement::top())?;

    let end_x = first_slot_x + measurements.top.width + cfg.node_spacing_h / 2.0;
    let start = Terminal {
        center: Point::new(start_x, row_y),
        radius: cfg.terminal_radius,
    };
    let end = Terminal {
        center: Point::new(end_x, row_y),
        radius: cfg.terminal_radius,
    };

    let nodes = placer.nodes;
    let connectors = route(tree, &nodes, start, end, cfg)?;

    let width = end_x + cfg.node_spacing_h / 2.0;
    let height = row_y
        + measurements.top.height
        + cfg.node_radius
        + cfg.small_label_offset_v
        + cfg.label_offset_v;

    debug!(
        nodes = nodes.len(),
        connectors = connectors.len(),
        width,
        height,
        "layout solved"
    );

    Ok(GraphLayout {
        nodes,
        connectors,
        start: Some(start),
        end: Some(end),
        width,
        height,
    })
}

fn ensure_unique_ids(tree: &StageTree) -> Result<()> {
    let mut seen: HashSet<NodeId> = HashSet::new();
    for id in tree.ids() {
        if !seen.insert(id) {
            return Err(StructuralError::DuplicateId { id }.into());
        }
    }
    Ok(())
}

/// Where a lane sits in the tree, carried down while placing.
#[derive(Debug, Clone, Copy)]
struct Placement {
    depth: usize,
    lane: usize,
    parent: Option<NodeId>,
}

impl Placement {
    fn top() -> Self {
        Self {
            depth: 0,
            lane: 0,
            parent: None,
        }
    }
}

struct Placer<'a> {
    cfg: &'a LayoutConfig,
    measurements: &'a Measurements,
    nodes: Vec<PositionedNode>,
}

impl<'a> Placer<'a> {
    fn place_lane(
        &mut self,
        lane: &Sequence,
        band: &BandMetrics,
        x_left: f64,
        y: f64,
        at: Placement,
    ) -> Result<()> {
        let measurements = self.measurements;
        let mut x = x_left;

        for (i, stage) in lane.stages.iter().enumerate() {
            let column = band.columns.get(i).copied().unwrap_or_default();
            let center = Point::new(x + column.slot / 2.0, y);
            let node = self.positioned(stage, center, i, at);
            self.nodes.push(node);

            if stage.is_parallel() {
                let nested = measurements.band(stage.id).ok_or_else(|| {
                    anyhow::anyhow!("missing band measurements for stage {}", stage.id)
                })?;
                self.place_band(stage, nested, x + column.slot, y, at.depth + 1)?;
            }

            x += column.width();
        }

        Ok(())
    }

    fn place_band(
        &mut self,
        owner: &Stage,
        band: &BandMetrics,
        x_left: f64,
        y_top: f64,
        depth: usize,
    ) -> Result<()> {
        let mut y = y_top;

        for (k, lane) in owner.branches.iter().enumerate() {
            let at = Placement {
                depth,
                lane: k,
                parent: Some(owner.id),
            };
            self.place_lane(lane, band, x_left, y, at)?;
            y += band.lane_extents.get(k).copied().unwrap_or(0.0) + self.cfg.parallel_spacing_h;
        }

        debug!(
            stage = %owner.id,
            branches = owner.branches.len(),
            width = band.width,
            height = band.height,
            "placed parallel band"
        );
        Ok(())
    }

    fn positioned(&self, stage: &Stage, center: Point, column: usize, at: Placement) -> PositionedNode {
        let cfg = self.cfg;
        let (placement, label_y) = if at.depth == 0 {
            (
                LabelPlacement::Above,
                center.y - cfg.node_radius - cfg.label_offset_v,
            )
        } else {
            (
                LabelPlacement::Below,
                center.y + cfg.node_radius + cfg.small_label_offset_v,
            )
        };

        PositionedNode {
            id: stage.id,
            name: stage.name.clone(),
            state: stage.state.clone(),
            complete_percent: stage.complete_percent,
            center,
            radius: cfg.node_radius,
            label: Label {
                text: stage.name.clone(),
                anchor: Point::new(center.x, label_y),
                placement,
                width: label_width(&stage.name, cfg),
            },
            depth: at.depth,
            column,
            lane: at.lane,
            parent: at.parent,
        }
    }
}

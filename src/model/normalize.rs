// src/model/normalize.rs

//! Turn caller-supplied stage shapes into a [`StageTree`].

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::{LayoutConfig, MAX_DEPTH_LIMIT};
use crate::errors::{Result, StructuralError};
use crate::model::stage::StageNode;
use crate::model::tree::{Sequence, Stage, StageTree};
use crate::model::NodeId;

/// Knobs for normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Deepest allowed parallel nesting; top-level stages sit at depth 0.
    pub max_depth: usize,
}

impl NormalizeOptions {
    /// `max_depth`, capped at [`MAX_DEPTH_LIMIT`] for hand-built options.
    pub fn depth_limit(&self) -> usize {
        self.max_depth.min(MAX_DEPTH_LIMIT)
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            max_depth: LayoutConfig::default().max_depth,
        }
    }
}

impl From<&LayoutConfig> for NormalizeOptions {
    fn from(cfg: &LayoutConfig) -> Self {
        Self {
            max_depth: cfg.max_depth,
        }
    }
}

/// Normalize a list of top-level stages.
///
/// - A top-level chain head contributes its whole chain to the top-level row.
/// - Each `children` entry becomes one branch; an empty `children` is a leaf.
/// - `complete_percent` is clamped to 0..=100.
/// - Ids must be unique across the whole input.
pub fn normalize(stages: &[StageNode], opts: &NormalizeOptions) -> Result<StageTree> {
    let mut seen = HashSet::new();
    let mut top = Vec::new();

    for head in stages {
        top.extend(normalize_chain(head, 0, opts, &mut seen)?.stages);
    }

    debug!(stages = seen.len(), top_level = top.len(), "normalized stage tree");
    Ok(StageTree::new(top))
}

fn normalize_chain(
    head: &StageNode,
    depth: usize,
    opts: &NormalizeOptions,
    seen: &mut HashSet<NodeId>,
) -> Result<Sequence> {
    let mut stages = Vec::new();
    for node in head.chain() {
        stages.push(normalize_stage(node, depth, opts, seen)?);
    }
    Ok(Sequence { stages })
}

fn normalize_stage(
    node: &StageNode,
    depth: usize,
    opts: &NormalizeOptions,
    seen: &mut HashSet<NodeId>,
) -> Result<Stage> {
    if depth > opts.depth_limit() {
        return Err(StructuralError::TooDeep {
            id: node.id,
            limit: opts.depth_limit(),
        }
        .into());
    }
    if !seen.insert(node.id) {
        return Err(StructuralError::DuplicateId { id: node.id }.into());
    }

    if !node.state.is_recognized() {
        warn!(
            stage = %node.id,
            state = %node.state,
            "unrecognized stage state; rendering unstyled"
        );
    }

    let mut branches = Vec::with_capacity(node.children.len());
    for child in &node.children {
        branches.push(normalize_chain(child, depth + 1, opts, seen)?);
    }

    Ok(Stage {
        id: node.id,
        name: node.name.clone(),
        state: node.state.clone(),
        complete_percent: node.complete_percent.map(|p| clamp_percent(node.id, p)),
        branches,
    })
}

pub(crate) fn clamp_percent(id: NodeId, raw: i32) -> u8 {
    let clamped = raw.clamp(0, 100);
    if clamped != raw {
        warn!(stage = %id, raw, clamped, "complete_percent out of range; clamped");
    }
    clamped as u8
}

// src/model/records.rs

//! Flat stage graph as delivered by upstream services.
//!
//! Records reference each other by id, so unlike the nested [`StageNode`]
//! form this one can express dangling references, shared nodes and
//! cycles. [`StageGraphInput::into_tree`] validates before building.
//!
//! [`StageNode`]: crate::model::StageNode

use std::collections::{HashMap, HashSet};

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{Result, StructuralError};
use crate::model::normalize::{clamp_percent, NormalizeOptions};
use crate::model::tree::{Sequence, Stage, StageTree};
use crate::model::NodeId;
use crate::types::StageState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageRecord {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub state: StageState,
    #[serde(default)]
    pub complete_percent: Option<i32>,
    /// Heads of this stage's parallel branches.
    #[serde(default)]
    pub children: Vec<NodeId>,
    #[serde(default)]
    pub next_sibling: Option<NodeId>,
}

impl StageRecord {
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            state: StageState::default(),
            complete_percent: None,
            children: Vec::new(),
            next_sibling: None,
        }
    }

    fn references(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().copied().chain(self.next_sibling)
    }
}

/// A flat stage graph: every record, plus the ordered top-level heads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageGraphInput {
    pub stages: Vec<StageRecord>,
    pub roots: Vec<NodeId>,
}

impl StageGraphInput {
    /// Validate the graph and build the normalized tree.
    pub fn into_tree(self, opts: &NormalizeOptions) -> Result<StageTree> {
        let by_id = index_records(&self.stages)?;
        validate_references(&self, &by_id)?;
        validate_acyclic(&self.stages)?;
        validate_sharing(&self)?;
        warn_orphans(&self, &by_id);

        let mut top = Vec::new();
        for root in &self.roots {
            top.extend(build_chain(*root, 0, opts, &by_id)?.stages);
        }

        debug!(top_level = top.len(), "built stage tree from flat records");
        Ok(StageTree::new(top))
    }
}

fn index_records(records: &[StageRecord]) -> Result<HashMap<NodeId, &StageRecord>> {
    let mut by_id = HashMap::with_capacity(records.len());
    for record in records {
        if by_id.insert(record.id, record).is_some() {
            return Err(StructuralError::DuplicateId { id: record.id }.into());
        }
    }
    Ok(by_id)
}

fn validate_references(
    input: &StageGraphInput,
    by_id: &HashMap<NodeId, &StageRecord>,
) -> Result<()> {
    for root in &input.roots {
        if !by_id.contains_key(root) {
            return Err(StructuralError::UnknownRoot { id: *root }.into());
        }
    }

    for record in &input.stages {
        for target in record.references() {
            if target == record.id {
                return Err(StructuralError::SelfReference { id: record.id }.into());
            }
            if !by_id.contains_key(&target) {
                return Err(StructuralError::UnknownReference {
                    from: record.id,
                    to: target,
                }
                .into());
            }
        }
    }

    Ok(())
}

/// Every stage may be entered from at most one place: a root slot, a
/// parent's `children`, or a predecessor's `next_sibling`.
fn validate_sharing(input: &StageGraphInput) -> Result<()> {
    let mut referenced: HashSet<NodeId> = HashSet::new();
    let targets = input
        .roots
        .iter()
        .copied()
        .chain(input.stages.iter().flat_map(StageRecord::references));

    for target in targets {
        if !referenced.insert(target) {
            return Err(StructuralError::SharedNode { id: target }.into());
        }
    }
    Ok(())
}

fn validate_acyclic(records: &[StageRecord]) -> Result<()> {
    // Edge direction: referrer -> referenced, for both child and sibling links.
    let mut graph: DiGraphMap<NodeId, ()> = DiGraphMap::new();

    for record in records {
        graph.add_node(record.id);
    }
    for record in records {
        for target in record.references() {
            graph.add_edge(record.id, target, ());
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(StructuralError::Cycle {
            id: cycle.node_id(),
        }
        .into()),
    }
}

fn warn_orphans(input: &StageGraphInput, by_id: &HashMap<NodeId, &StageRecord>) {
    let mut reachable: HashSet<NodeId> = HashSet::new();
    let mut stack: Vec<NodeId> = input.roots.clone();

    while let Some(id) = stack.pop() {
        if !reachable.insert(id) {
            continue;
        }
        if let Some(record) = by_id.get(&id) {
            stack.extend(record.references());
        }
    }

    for record in &input.stages {
        if !reachable.contains(&record.id) {
            warn!(stage = %record.id, name = %record.name, "stage not reachable from any root; not rendered");
        }
    }
}

fn build_chain(
    head: NodeId,
    depth: usize,
    opts: &NormalizeOptions,
    by_id: &HashMap<NodeId, &StageRecord>,
) -> Result<Sequence> {
    let mut stages = Vec::new();
    let mut cursor = Some(head);

    while let Some(id) = cursor {
        // References were validated, so the lookup only fails on a logic error.
        let record = by_id
            .get(&id)
            .ok_or(StructuralError::UnknownRoot { id })?;

        if depth > opts.depth_limit() {
            return Err(StructuralError::TooDeep {
                id,
                limit: opts.depth_limit(),
            }
            .into());
        }

        if !record.state.is_recognized() {
            warn!(stage = %id, state = %record.state, "unrecognized stage state; rendering unstyled");
        }

        let mut branches = Vec::with_capacity(record.children.len());
        for child in &record.children {
            branches.push(build_chain(*child, depth + 1, opts, by_id)?);
        }

        stages.push(Stage {
            id,
            name: record.name.clone(),
            state: record.state.clone(),
            complete_percent: record.complete_percent.map(|p| clamp_percent(id, p)),
            branches,
        });
        cursor = record.next_sibling;
    }

    Ok(Sequence { stages })
}

/// Stage data in either accepted shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StageInput {
    /// Nested stages with `children` / `nextSibling`.
    Nested(Vec<crate::model::StageNode>),
    /// Flat records referencing each other by id.
    Flat(StageGraphInput),
}

impl StageInput {
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn into_tree(self, opts: &NormalizeOptions) -> Result<StageTree> {
        match self {
            StageInput::Nested(stages) => crate::model::normalize(&stages, opts),
            StageInput::Flat(graph) => graph.into_tree(opts),
        }
    }
}

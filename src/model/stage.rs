// src/model/stage.rs

//! Caller-facing stage shape.
//!
//! This mirrors what the upstream run service and the dashboard's demo data
//! hand over: a stage may carry `children` (a parallel split, one branch per
//! entry) and may be the head of a chain linked through `next_sibling`.

use serde::{Deserialize, Serialize};

use crate::model::NodeId;
use crate::types::StageState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageNode {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub state: StageState,
    /// Progress while running. Upstream occasionally sends values outside
    /// 0..=100; normalization clamps them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete_percent: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<StageNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_sibling: Option<Box<StageNode>>,
}

impl StageNode {
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

    pub fn with_state(mut self, state: impl Into<StageState>) -> Self {
        self.state = state.into();
        self
    }

    pub fn with_progress(mut self, percent: i32) -> Self {
        self.complete_percent = Some(percent);
        self
    }

    /// Attach parallel branches. Each entry is a standalone stage or the head
    /// of a chain built with [`sequence`].
    pub fn with_children(mut self, children: Vec<StageNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_parallel(&self) -> bool {
        !self.children.is_empty()
    }

    /// Walk this stage and its `next_sibling` chain, head first.
    pub fn chain(&self) -> ChainIter<'_> {
        ChainIter { next: Some(self) }
    }
}

/// Iterator over a `next_sibling` chain.
pub struct ChainIter<'a> {
    next: Option<&'a StageNode>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a StageNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next_sibling.as_deref();
        Some(current)
    }
}

/// Link stages into one chain and return its head.
///
/// Only the head is referenced from a parent's `children`; the rest hang off
/// `next_sibling`. Returns `None` for an empty list.
pub fn sequence(stages: Vec<StageNode>) -> Option<StageNode> {
    stages.into_iter().rev().fold(None, |tail, mut stage| {
        // Anything already hanging off `stage` is replaced by the rest of the chain.
        stage.next_sibling = tail.map(Box::new);
        Some(stage)
    })
}

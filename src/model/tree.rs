// src/model/tree.rs

//! Normalized stage tree consumed by the layout solver.
//!
//! A tree is an implicit top-level [`Sequence`]. Each [`Stage`] may open a
//! parallel group whose branches are themselves sequences, so a standalone
//! branch node is a one-element sequence and a chain is a longer one.

use serde::Serialize;

use crate::model::NodeId;
use crate::types::StageState;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StageTree {
    pub stages: Sequence,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sequence {
    pub stages: Vec<Stage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stage {
    pub id: NodeId,
    pub name: String,
    pub state: StageState,
    /// Clamped to 0..=100.
    pub complete_percent: Option<u8>,
    /// Parallel branches, in render order (top to bottom).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<Sequence>,
}

impl Stage {
    pub fn is_parallel(&self) -> bool {
        !self.branches.is_empty()
    }
}

impl Sequence {
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn first(&self) -> Option<&Stage> {
        self.stages.first()
    }

    pub fn last(&self) -> Option<&Stage> {
        self.stages.last()
    }
}

impl StageTree {
    pub fn new(stages: Vec<Stage>) -> Self {
        Self {
            stages: Sequence { stages },
        }
    }

    pub fn top_level(&self) -> &[Stage] {
        &self.stages.stages
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Total number of stages at every depth.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Depth-first walk in render order: a stage, then its branches top to
    /// bottom, then the stage that follows it.
    pub fn iter(&self) -> TreeIter<'_> {
        TreeIter {
            stack: self.stages.stages.iter().rev().collect(),
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter().map(|s| s.id)
    }

    pub fn find(&self, id: NodeId) -> Option<&Stage> {
        self.iter().find(|s| s.id == id)
    }

    /// Nesting depth of parallel groups; 0 for a flat pipeline or an empty tree.
    pub fn max_depth(&self) -> usize {
        fn depth_of(seq: &Sequence) -> usize {
            seq.stages
                .iter()
                .filter(|s| s.is_parallel())
                .map(|s| 1 + s.branches.iter().map(depth_of).max().unwrap_or(0))
                .max()
                .unwrap_or(0)
        }
        depth_of(&self.stages)
    }
}

pub struct TreeIter<'a> {
    stack: Vec<&'a Stage>,
}

impl<'a> Iterator for TreeIter<'a> {
    type Item = &'a Stage;

    fn next(&mut self) -> Option<Self::Item> {
        let stage = self.stack.pop()?;
        for branch in stage.branches.iter().rev() {
            self.stack.extend(branch.stages.iter().rev());
        }
        Some(stage)
    }
}

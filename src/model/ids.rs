// src/model/ids.rs

use crate::model::stage::StageNode;
use crate::model::NodeId;

/// Monotonic stage-id allocator.
///
/// Whoever constructs a tree owns one of these; ids are unique per
/// allocator, starting at 1, in creation order.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Start allocating at `first` (useful when extending an existing tree).
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }

    /// Create a leaf stage with a fresh id and default state.
    pub fn node(&mut self, name: impl Into<String>) -> StageNode {
        StageNode::new(self.next_id(), name)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

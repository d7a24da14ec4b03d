// src/model/mod.rs

//! Stage data model.
//!
//! - [`stage`] is the caller-facing input shape (`children` plus
//!   `next_sibling` chains), with builder helpers.
//! - [`ids`] hands out stage ids for trees built in code.
//! - [`records`] is the flat, id-referencing form delivered by upstream
//!   services, validated before use.
//! - [`tree`] is the normalized tree the solver consumes.
//! - [`normalize`] turns input shapes into a [`StageTree`].

pub mod ids;
pub mod normalize;
pub mod records;
pub mod stage;
pub mod tree;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a stage. Names are display-only; every identity-sensitive
/// operation keys on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(raw: u32) -> Self {
        NodeId(raw)
    }
}

pub use ids::IdAllocator;
pub use normalize::{normalize, NormalizeOptions};
pub use records::{StageGraphInput, StageInput, StageRecord};
pub use stage::{sequence, StageNode};
pub use tree::{Sequence, Stage, StageTree};

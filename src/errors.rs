// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::model::NodeId;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed stage tree: {0}")]
    Structural(#[from] StructuralError),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Ways a stage tree can violate the shape the solver relies on.
///
/// These are caller contract violations: the view falls back to a
/// placeholder instead of drawing a partial graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("cycle detected in stage graph involving stage {id}")]
    Cycle { id: NodeId },

    #[error("stage id {id} is used more than once")]
    DuplicateId { id: NodeId },

    #[error("stage {from} references unknown stage {to}")]
    UnknownReference { from: NodeId, to: NodeId },

    #[error("top-level stage {id} does not exist")]
    UnknownRoot { id: NodeId },

    #[error("stage {id} is referenced from more than one place")]
    SharedNode { id: NodeId },

    #[error("stage {id} references itself")]
    SelfReference { id: NodeId },

    #[error("stage {id} is nested deeper than the limit of {limit}")]
    TooDeep { id: NodeId, limit: usize },
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, LayoutError>;

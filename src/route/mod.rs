// src/route/mod.rs

//! Connector routing between positioned nodes.
//!
//! [`router`] walks the stage tree and decides which nodes join which;
//! [`path`] turns each join into line and arc segments.

pub mod path;
pub mod router;

use serde::Serialize;

use crate::model::NodeId;

pub use path::PathSegment;
pub use router::route;

/// One end of a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Endpoint {
    /// The implicit start terminal.
    Start,
    /// The implicit end terminal.
    End,
    Node(NodeId),
}

impl Endpoint {
    pub fn node_id(&self) -> Option<NodeId> {
        match self {
            Endpoint::Node(id) => Some(*id),
            Endpoint::Start | Endpoint::End => None,
        }
    }

    pub fn touches(&self, id: NodeId) -> bool {
        self.node_id() == Some(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorKind {
    /// Consecutive stages in one sequence.
    Straight,
    /// A parallel stage into the head of one of its branches.
    FanOut,
    /// The last stage of a branch into whatever follows the band.
    Merge,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connector {
    pub from: Endpoint,
    pub to: Endpoint,
    pub kind: ConnectorKind,
    pub path: Vec<PathSegment>,
    pub stroke_width: f64,
}

impl Connector {
    pub fn touches(&self, id: NodeId) -> bool {
        self.from.touches(id) || self.to.touches(id)
    }

    /// SVG path data (`M`/`L`/`A` commands) for the presentation layer.
    pub fn to_svg_path(&self) -> String {
        path::to_svg(&self.path)
    }
}

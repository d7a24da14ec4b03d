// src/layout/mod.rs

//! Layout solver: stage tree + config -> positioned nodes.
//!
//! - [`measure`] computes slot widths and band extents bottom-up.
//! - [`solver`] places every stage and asks the router for connectors.
//!
//! The output types live here so the router and the overlay can share them.

pub mod measure;
pub mod solver;

use serde::Serialize;

use crate::model::NodeId;
use crate::route::Connector;
use crate::types::{LabelPlacement, StageState};

pub use solver::solve;

/// A point in layout space (pixels, origin top-left, y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned bounds, used for label boxes and graph extents.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    /// Horizontal center of the text, at its baseline.
    pub anchor: Point,
    pub placement: LabelPlacement,
    /// Estimated rendered width.
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedNode {
    pub id: NodeId,
    pub name: String,
    pub state: StageState,
    pub complete_percent: Option<u8>,
    pub center: Point,
    pub radius: f64,
    pub label: Label,
    /// Parallel nesting depth; 0 for top-level stages.
    pub depth: usize,
    /// Index within its sequence (top-level row or branch).
    pub column: usize,
    /// Index of its branch within the enclosing band; 0 at top level.
    pub lane: usize,
    /// Stage whose parallel band contains this node.
    pub parent: Option<NodeId>,
}

impl PositionedNode {
    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.center.x - self.radius,
            y: self.center.y - self.radius,
            width: self.radius * 2.0,
            height: self.radius * 2.0,
        }
    }
}

/// Implicit start/end dot bracketing the graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Terminal {
    pub center: Point,
    pub radius: f64,
}

/// Complete, renderable layout for one stage tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphLayout {
    /// One entry per stage, in depth-first render order.
    pub nodes: Vec<PositionedNode>,
    pub connectors: Vec<Connector>,
    pub start: Option<Terminal>,
    pub end: Option<Terminal>,
    pub width: f64,
    pub height: f64,
}

impl GraphLayout {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&PositionedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

// src/overlay/selection.rs

use serde::Serialize;
use tracing::warn;

use crate::layout::GraphLayout;
use crate::model::NodeId;
use crate::route::Endpoint;
use crate::types::StageState;

/// Visual class of a node. Unknown and unrecognized states both render as
/// `Unstyled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Success,
    Failure,
    Running,
    Queued,
    Unstable,
    Aborted,
    NotBuilt,
    Skipped,
    Paused,
    Unstyled,
}

impl From<&StageState> for StatusCategory {
    fn from(state: &StageState) -> Self {
        match state {
            StageState::Success => StatusCategory::Success,
            StageState::Failure => StatusCategory::Failure,
            StageState::Running => StatusCategory::Running,
            StageState::Queued => StatusCategory::Queued,
            StageState::Unstable => StatusCategory::Unstable,
            StageState::Aborted => StatusCategory::Aborted,
            StageState::NotBuilt => StatusCategory::NotBuilt,
            StageState::Skipped => StatusCategory::Skipped,
            StageState::Paused => StatusCategory::Paused,
            StageState::Unknown | StageState::Unrecognized(_) => StatusCategory::Unstyled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeVisual {
    pub id: NodeId,
    pub status: StatusCategory,
    pub selected: bool,
    /// Only set while running.
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorVisual {
    pub from: Endpoint,
    pub to: Endpoint,
    pub highlighted: bool,
    pub svg_path: String,
}

/// Everything the presentation layer needs for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub layout: GraphLayout,
    pub nodes: Vec<NodeVisual>,
    pub connectors: Vec<ConnectorVisual>,
    /// The effective selection: `None` when nothing, or a stale id, was passed.
    pub selected: Option<NodeId>,
}

/// Derive visual state for a layout and an externally owned selection.
///
/// A selection that does not name a node in this layout is treated as no
/// selection.
pub fn render_state(layout: &GraphLayout, selected: Option<NodeId>) -> RenderModel {
    let selected = selected.filter(|id| {
        let present = layout.node(*id).is_some();
        if !present {
            warn!(stage = %id, "selected stage not in layout; ignoring selection");
        }
        present
    });

    let nodes = layout
        .nodes
        .iter()
        .map(|node| NodeVisual {
            id: node.id,
            status: StatusCategory::from(&node.state),
            selected: selected == Some(node.id),
            progress: node
                .state
                .shows_progress()
                .then_some(node.complete_percent)
                .flatten(),
        })
        .collect();

    let connectors = layout
        .connectors
        .iter()
        .map(|c| ConnectorVisual {
            from: c.from,
            to: c.to,
            highlighted: selected.is_some_and(|id| c.touches(id)),
            svg_path: c.to_svg_path(),
        })
        .collect();

    RenderModel {
        layout: layout.clone(),
        nodes,
        connectors,
        selected,
    }
}

// src/overlay/hit.rs

use tracing::trace;

use crate::config::LayoutConfig;
use crate::layout::{GraphLayout, Point, PositionedNode};
use crate::model::NodeId;

/// Find the node under `point`.
///
/// A node's hit region is a circle of `radius + hit_slop` around its center.
/// When regions overlap, the closest center wins, then the lower id.
pub fn hit_test<'a>(
    layout: &'a GraphLayout,
    point: Point,
    cfg: &LayoutConfig,
) -> Option<&'a PositionedNode> {
    let hit = layout
        .nodes
        .iter()
        .filter_map(|node| {
            let distance = node.center.distance_to(point);
            (distance <= node.radius + cfg.hit_slop).then_some((distance, node))
        })
        .min_by(|(da, a), (db, b)| da.total_cmp(db).then(a.id.cmp(&b.id)))
        .map(|(_, node)| node);

    trace!(x = point.x, y = point.y, hit = ?hit.map(|n| n.id), "hit test");
    hit
}

/// Resolve a click and hand the node to the caller's callback.
///
/// Returns the id of the clicked node, or `None` if the click missed.
pub fn dispatch_click<F>(
    layout: &GraphLayout,
    point: Point,
    cfg: &LayoutConfig,
    mut on_click: F,
) -> Option<NodeId>
where
    F: FnMut(&PositionedNode),
{
    let node = hit_test(layout, point, cfg)?;
    on_click(node);
    Some(node.id)
}

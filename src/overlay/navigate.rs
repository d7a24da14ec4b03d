// src/overlay/navigate.rs

//! Keyboard focus movement over a layout.

use std::cmp::Ordering;

use crate::layout::{GraphLayout, PositionedNode};
use crate::model::NodeId;
use crate::route::path::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}

/// Where focus goes when `key` is pressed while `current` is focused.
///
/// With no focus (or a focus id that is not in the layout) any key lands on
/// the first node, except `Last`. Returns `None` only for an empty layout;
/// when there is nothing in the requested direction focus stays put.
pub fn navigate(layout: &GraphLayout, current: Option<NodeId>, key: NavKey) -> Option<NodeId> {
    let current = current.and_then(|id| layout.node(id));

    let Some(cur) = current else {
        return match key {
            NavKey::Last => last(layout),
            _ => first(layout),
        };
    };

    let next = match key {
        NavKey::First => return first(layout),
        NavKey::Last => return last(layout),
        NavKey::Right => closest(layout, cur, |dx, _| dx > EPSILON, |dx, dy| (dy.abs(), dx)),
        NavKey::Left => closest(layout, cur, |dx, _| dx < -EPSILON, |dx, dy| (dy.abs(), -dx)),
        NavKey::Down => closest(layout, cur, |_, dy| dy > EPSILON, |dx, dy| (dy, dx.abs())),
        NavKey::Up => closest(layout, cur, |_, dy| dy < -EPSILON, |dx, dy| (-dy, dx.abs())),
    };

    Some(next.unwrap_or(cur.id))
}

fn first(layout: &GraphLayout) -> Option<NodeId> {
    layout
        .nodes
        .iter()
        .min_by(|a, b| by_position(a, b))
        .map(|n| n.id)
}

fn last(layout: &GraphLayout) -> Option<NodeId> {
    layout
        .nodes
        .iter()
        .min_by(|a, b| {
            b.center
                .x
                .total_cmp(&a.center.x)
                .then(a.center.y.total_cmp(&b.center.y))
                .then(a.id.cmp(&b.id))
        })
        .map(|n| n.id)
}

fn by_position(a: &PositionedNode, b: &PositionedNode) -> Ordering {
    a.center
        .x
        .total_cmp(&b.center.x)
        .then(a.center.y.total_cmp(&b.center.y))
        .then(a.id.cmp(&b.id))
}

/// Pick the candidate accepted by `keep` with the smallest `score`, ties to
/// the lower id. Both closures receive the offset from `cur`.
fn closest<K, S>(layout: &GraphLayout, cur: &PositionedNode, keep: K, score: S) -> Option<NodeId>
where
    K: Fn(f64, f64) -> bool,
    S: Fn(f64, f64) -> (f64, f64),
{
    layout
        .nodes
        .iter()
        .filter(|n| n.id != cur.id)
        .filter_map(|n| {
            let dx = n.center.x - cur.center.x;
            let dy = n.center.y - cur.center.y;
            keep(dx, dy).then(|| (score(dx, dy), n.id))
        })
        .min_by(|((a0, a1), a_id), ((b0, b1), b_id)| {
            a0.total_cmp(b0).then(a1.total_cmp(b1)).then(a_id.cmp(b_id))
        })
        .map(|(_, id)| id)
}

#![allow(dead_code)]

use pipeline_layout::layout::{GraphLayout, Point, PositionedNode};
use pipeline_layout::route::PathSegment;

pub use pipeline_layout_test_utils::{init_tracing, layout_of, named, node};

pub const EPS: f64 = 1e-6;

/// Shortest distance from `p` to the segment `a`-`b`.
pub fn distance_to_line(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len2 = dx * dx + dy * dy;
    if len2 < EPS {
        return p.distance_to(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len2).clamp(0.0, 1.0);
    p.distance_to(Point::new(a.x + t * dx, a.y + t * dy))
}

/// Points along a segment, dense enough to catch glyph overlaps.
pub fn sample(segment: &PathSegment) -> Vec<Point> {
    match *segment {
        PathSegment::Line { from, to } => (0..=20)
            .map(|i| {
                let t = i as f64 / 20.0;
                Point::new(from.x + t * (to.x - from.x), from.y + t * (to.y - from.y))
            })
            .collect(),
        PathSegment::Arc {
            from,
            to,
            center,
            radius,
            ..
        } => {
            let a0 = (from.y - center.y).atan2(from.x - center.x);
            let mut a1 = (to.y - center.y).atan2(to.x - center.x);
            // Quarter arcs: take the short way round.
            if (a1 - a0).abs() > std::f64::consts::PI {
                a1 -= (a1 - a0).signum() * 2.0 * std::f64::consts::PI;
            }
            (0..=20)
                .map(|i| {
                    let a = a0 + (a1 - a0) * i as f64 / 20.0;
                    Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
                })
                .collect()
        }
    }
}

/// Nodes sitting on the same row, left to right.
pub fn row<'a>(layout: &'a GraphLayout, y: f64) -> Vec<&'a PositionedNode> {
    let mut nodes: Vec<_> = layout
        .nodes
        .iter()
        .filter(|n| (n.center.y - y).abs() < EPS)
        .collect();
    nodes.sort_by(|a, b| a.center.x.total_cmp(&b.center.x));
    nodes
}

// src/route/path.rs

use std::fmt::Write as _;

use serde::Serialize;

use crate::layout::Point;

/// Below this, two coordinates are treated as equal.
pub const EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PathSegment {
    Line {
        from: Point,
        to: Point,
    },
    /// Quarter circle. `clockwise` is in screen space (y down), matching the
    /// SVG sweep flag.
    Arc {
        from: Point,
        to: Point,
        center: Point,
        radius: f64,
        clockwise: bool,
    },
}

impl PathSegment {
    pub fn from(&self) -> Point {
        match self {
            PathSegment::Line { from, .. } | PathSegment::Arc { from, .. } => *from,
        }
    }

    pub fn to(&self) -> Point {
        match self {
            PathSegment::Line { to, .. } | PathSegment::Arc { to, .. } => *to,
        }
    }
}

/// Build the path from `a` to `b` with an orthogonal dogleg at `bend_x`.
///
/// Horizontal run at `a.y`, quarter arc, vertical run, quarter arc,
/// horizontal run at `b.y`. `radius` is shrunk when the drop or the
/// horizontal room around `bend_x` is too small for it.
pub fn dogleg(a: Point, b: Point, bend_x: f64, radius: f64) -> Vec<PathSegment> {
    let dy = b.y - a.y;
    if dy.abs() < EPSILON {
        return vec![PathSegment::Line { from: a, to: b }];
    }

    let s = dy.signum();
    let r = radius
        .min(dy.abs() / 2.0)
        .min((bend_x - a.x).max(0.0))
        .min((b.x - bend_x).max(0.0));

    let mut segments = Vec::with_capacity(5);

    let p1 = Point::new(bend_x - r, a.y);
    let p2 = Point::new(bend_x, a.y + s * r);
    let p3 = Point::new(bend_x, b.y - s * r);
    let p4 = Point::new(bend_x + r, b.y);

    push_line(&mut segments, a, p1);
    if r > EPSILON {
        segments.push(PathSegment::Arc {
            from: p1,
            to: p2,
            center: Point::new(bend_x - r, a.y + s * r),
            radius: r,
            clockwise: s > 0.0,
        });
    }
    push_line(&mut segments, p2, p3);
    if r > EPSILON {
        segments.push(PathSegment::Arc {
            from: p3,
            to: p4,
            center: Point::new(bend_x + r, b.y - s * r),
            radius: r,
            clockwise: s < 0.0,
        });
    }
    push_line(&mut segments, p4, b);

    segments
}

fn push_line(segments: &mut Vec<PathSegment>, from: Point, to: Point) {
    if from.distance_to(to) > EPSILON {
        segments.push(PathSegment::Line { from, to });
    }
}

/// Render segments as SVG path data.
pub fn to_svg(segments: &[PathSegment]) -> String {
    let mut out = String::new();
    let Some(first) = segments.first() else {
        return out;
    };

    let start = first.from();
    let _ = write!(out, "M {} {}", fmt_num(start.x), fmt_num(start.y));

    for segment in segments {
        match segment {
            PathSegment::Line { to, .. } => {
                let _ = write!(out, " L {} {}", fmt_num(to.x), fmt_num(to.y));
            }
            PathSegment::Arc {
                to,
                radius,
                clockwise,
                ..
            } => {
                let _ = write!(
                    out,
                    " A {r} {r} 0 0 {sweep} {} {}",
                    fmt_num(to.x),
                    fmt_num(to.y),
                    r = fmt_num(*radius),
                    sweep = u8::from(*clockwise),
                );
            }
        }
    }

    out
}

fn fmt_num(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

// src/route/router.rs

use std::collections::HashMap;

use tracing::debug;

use crate::config::LayoutConfig;
use crate::errors::Result;
use crate::layout::measure::slot_width;
use crate::layout::{Point, PositionedNode, Terminal};
use crate::model::tree::{Sequence, StageTree};
use crate::model::NodeId;
use crate::route::path::{dogleg, EPSILON};
use crate::route::{Connector, ConnectorKind, Endpoint};

/// Where a connector may attach to an endpoint.
#[derive(Debug, Clone, Copy)]
struct Anchor {
    center: Point,
    radius: f64,
    /// Half the width of the slot the endpoint sits in. Nothing else is
    /// drawn inside it on the endpoint's row or the rows its band spans.
    half_slot: f64,
}

/// A connector whose source is known but whose target is not yet.
#[derive(Debug, Clone, Copy)]
struct Pending {
    from: Endpoint,
    kind: ConnectorKind,
}

/// Route every connector for a positioned tree.
///
/// - consecutive stages in a sequence: one straight link;
/// - a parallel stage: one fan-out per branch head;
/// - branch ends: one merge each into whatever follows the band, which for
///   a band at the end of a branch is whatever follows the enclosing band.
pub fn route(
    tree: &StageTree,
    nodes: &[PositionedNode],
    start: Terminal,
    end: Terminal,
    cfg: &LayoutConfig,
) -> Result<Vec<Connector>> {
    let mut anchors: HashMap<Endpoint, Anchor> = nodes
        .iter()
        .map(|n| {
            let anchor = Anchor {
                center: n.center,
                radius: n.radius,
                half_slot: slot_width(&n.name, cfg) / 2.0,
            };
            (Endpoint::Node(n.id), anchor)
        })
        .collect();
    for (endpoint, terminal) in [(Endpoint::Start, start), (Endpoint::End, end)] {
        let anchor = Anchor {
            center: terminal.center,
            radius: terminal.radius,
            half_slot: cfg.node_spacing_h / 2.0,
        };
        anchors.insert(endpoint, anchor);
    }

    let mut router = Router {
        cfg,
        anchors,
        connectors: Vec::new(),
    };

    let entry = vec![Pending {
        from: Endpoint::Start,
        kind: ConnectorKind::Straight,
    }];
    let exits = router.route_sequence(&tree.stages, entry)?;
    for pending in exits {
        router.connect(pending, Endpoint::End)?;
    }

    debug!(connectors = router.connectors.len(), "connectors routed");
    Ok(router.connectors)
}

struct Router<'a> {
    cfg: &'a LayoutConfig,
    anchors: HashMap<Endpoint, Anchor>,
    connectors: Vec<Connector>,
}

impl<'a> Router<'a> {
    /// Connect `incoming` to the head of `seq`, route through it, and return
    /// the connectors still waiting for a target after its last stage.
    fn route_sequence(&mut self, seq: &Sequence, incoming: Vec<Pending>) -> Result<Vec<Pending>> {
        let mut incoming = incoming;

        for stage in &seq.stages {
            let here = Endpoint::Node(stage.id);
            for pending in incoming.drain(..) {
                self.connect(pending, here)?;
            }

            if stage.is_parallel() {
                let mut exits = Vec::new();
                for branch in &stage.branches {
                    let fan = vec![Pending {
                        from: here,
                        kind: ConnectorKind::FanOut,
                    }];
                    exits.extend(self.route_sequence(branch, fan)?);
                }
                incoming = exits
                    .into_iter()
                    .map(|p| Pending {
                        from: p.from,
                        kind: ConnectorKind::Merge,
                    })
                    .collect();
            } else {
                incoming.push(Pending {
                    from: here,
                    kind: ConnectorKind::Straight,
                });
            }
        }

        Ok(incoming)
    }

    fn anchor(&self, endpoint: Endpoint) -> Result<Anchor> {
        self.anchors.get(&endpoint).copied().ok_or_else(|| {
            anyhow::anyhow!("no position for connector endpoint {endpoint:?}").into()
        })
    }

    fn connect(&mut self, pending: Pending, to: Endpoint) -> Result<()> {
        let source = self.anchor(pending.from)?;
        let target = self.anchor(to)?;

        // Paths leave and enter on the node edges, never the centers.
        let a = Point::new(source.center.x + source.radius, source.center.y);
        let b = Point::new(target.center.x - target.radius, target.center.y);

        // The vertical run stays inside the source's slot for a fan-out and
        // inside the target's slot for a merge; the band in between is
        // never crossed.
        let cr = self.cfg.curve_radius;
        let bend_x = match pending.kind {
            ConnectorKind::FanOut => (a.x + cr).min(source.center.x + source.half_slot),
            ConnectorKind::Merge => (b.x - cr).max(target.center.x - target.half_slot),
            ConnectorKind::Straight => (a.x + b.x) / 2.0,
        }
        .clamp(a.x.min(b.x), a.x.max(b.x));

        let drops = (b.y - a.y).abs() > EPSILON;
        if drops && (bend_x - a.x < cr || b.x - bend_x < cr) {
            debug!(
                from = ?pending.from,
                to = ?to,
                bend_x,
                "not enough room for a full curve; tightening"
            );
        }

        self.connectors.push(Connector {
            from: pending.from,
            to,
            kind: pending.kind,
            path: dogleg(a, b, bend_x, cr),
            stroke_width: self.cfg.connector_stroke_width,
        });
        Ok(())
    }
}

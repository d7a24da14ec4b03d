mod common;

use common::{init_tracing, layout_of, named, sample, EPS};
use pipeline_layout::config::LayoutConfig;
use pipeline_layout::layout::GraphLayout;
use pipeline_layout::model::NodeId;
use pipeline_layout::route::{Connector, ConnectorKind, Endpoint, PathSegment};
use pipeline_layout_test_utils::builders::LayoutConfigBuilder;
use pipeline_layout_test_utils::fixtures;

fn fat_config() -> LayoutConfig {
    LayoutConfigBuilder::new()
        .connector_stroke_width(10.0)
        .node_radius(20.0)
        .curve_radius(10.0)
        .build()
}

fn n(id: u32) -> Endpoint {
    Endpoint::Node(NodeId(id))
}

fn anchor(layout: &GraphLayout, endpoint: Endpoint) -> (pipeline_layout::layout::Point, f64) {
    match endpoint {
        Endpoint::Start => {
            let t = layout.start.unwrap();
            (t.center, t.radius)
        }
        Endpoint::End => {
            let t = layout.end.unwrap();
            (t.center, t.radius)
        }
        Endpoint::Node(id) => {
            let node = layout.node(id).unwrap();
            (node.center, node.radius)
        }
    }
}

#[test]
fn build_and_test_connectors_in_routing_order() {
    init_tracing();
    let layout = layout_of(&fixtures::build_and_test(), &LayoutConfig::default());

    let edges: Vec<(Endpoint, Endpoint, ConnectorKind)> = layout
        .connectors
        .iter()
        .map(|c| (c.from, c.to, c.kind))
        .collect();

    assert_eq!(
        edges,
        vec![
            (Endpoint::Start, n(1), ConnectorKind::Straight),
            (n(1), n(2), ConnectorKind::Straight),
            (n(2), n(3), ConnectorKind::FanOut),
            (n(2), n(4), ConnectorKind::FanOut),
            (n(3), Endpoint::End, ConnectorKind::Merge),
            (n(4), Endpoint::End, ConnectorKind::Merge),
        ]
    );
}

#[test]
fn fan_out_curve_bends_next_to_the_source() {
    let layout = layout_of(&fixtures::build_and_test(), &LayoutConfig::default());
    let fan = layout
        .connectors
        .iter()
        .find(|c| c.from == n(2) && c.to == n(4))
        .unwrap();

    assert_eq!(
        fan.to_svg_path(),
        "M 312 55 A 12 12 0 0 1 324 67 L 324 163 A 12 12 0 0 0 336 175 L 408 175"
    );
}

#[test]
fn merge_curve_bends_next_to_the_target() {
    let layout = layout_of(&fixtures::build_and_test(), &LayoutConfig::default());
    let merge = layout
        .connectors
        .iter()
        .find(|c| c.from == n(4) && c.to == Endpoint::End)
        .unwrap();

    let end = layout.end.unwrap();
    let vertical = merge
        .path
        .iter()
        .find_map(|s| match s {
            PathSegment::Line { from, to } if (from.x - to.x).abs() < EPS => Some(from.x),
            _ => None,
        })
        .expect("merge has a vertical run");
    let cfg = LayoutConfig::default();
    assert!((vertical - (end.center.x - end.radius - cfg.curve_radius)).abs() < EPS);
}

#[test]
fn straight_links_are_single_lines() {
    let layout = layout_of(&fixtures::flat_pipeline(), &LayoutConfig::default());

    assert_eq!(layout.connectors.len(), layout.nodes.len() + 1);
    for c in &layout.connectors {
        assert_eq!(c.kind, ConnectorKind::Straight);
        assert_eq!(c.path.len(), 1);
        assert!(matches!(c.path[0], PathSegment::Line { .. }));
    }
}

#[test]
fn paths_start_and_end_on_glyph_edges() {
    for cfg in [LayoutConfig::default(), fat_config()] {
        for (name, stages) in fixtures::all() {
            let layout = layout_of(&stages, &cfg);
            for c in &layout.connectors {
                let first = c.path.first().unwrap().from();
                let last = c.path.last().unwrap().to();
                let (from_center, from_r) = anchor(&layout, c.from);
                let (to_center, to_r) = anchor(&layout, c.to);

                assert!((first.distance_to(from_center) - from_r).abs() < EPS, "{name}: {c:?}");
                assert!((last.distance_to(to_center) - to_r).abs() < EPS, "{name}: {c:?}");
            }
        }
    }
}

#[test]
fn curves_never_cross_node_glyphs() {
    for cfg in [LayoutConfig::default(), fat_config()] {
        for (name, stages) in fixtures::all() {
            let layout = layout_of(&stages, &cfg);
            for c in &layout.connectors {
                for segment in &c.path {
                    for p in sample(segment) {
                        for node in &layout.nodes {
                            assert!(
                                p.distance_to(node.center) >= node.radius - EPS,
                                "{name}: connector {:?}->{:?} enters node {}",
                                c.from,
                                c.to,
                                node.id
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn segments_are_continuous() {
    for (name, stages) in fixtures::all() {
        let layout = layout_of(&stages, &LayoutConfig::default());
        for c in &layout.connectors {
            for pair in c.path.windows(2) {
                assert!(pair[0].to().distance_to(pair[1].from()) < EPS, "{name}: {c:?}");
            }
        }
    }
}

#[test]
fn one_to_many_and_many_to_one() {
    let layout = layout_of(&fixtures::mixed(), &LayoutConfig::default());
    let browser = named(&layout, "Browser Tests").id;
    let skizzled = named(&layout, "Skizzled").id;

    let fans: Vec<&Connector> = layout
        .connectors
        .iter()
        .filter(|c| c.from == Endpoint::Node(browser))
        .collect();
    assert_eq!(fans.len(), 4);
    assert!(fans.iter().all(|c| c.kind == ConnectorKind::FanOut));

    let merges: Vec<&Connector> = layout
        .connectors
        .iter()
        .filter(|c| c.to == Endpoint::Node(skizzled))
        .collect();
    assert_eq!(merges.len(), 4);
    assert!(merges.iter().all(|c| c.kind == ConnectorKind::Merge));
}

#[test]
fn back_to_back_parallel_groups_merge_then_fan() {
    let layout = layout_of(&fixtures::mixed(), &LayoutConfig::default());
    let test = named(&layout, "Test").id;
    let browser = named(&layout, "Browser Tests").id;

    let into_browser = layout
        .connectors
        .iter()
        .filter(|c| c.to == Endpoint::Node(browser))
        .count();
    let out_of_test = layout
        .connectors
        .iter()
        .filter(|c| c.from == Endpoint::Node(test))
        .count();

    assert_eq!(into_browser, 3);
    assert_eq!(out_of_test, 3);
}

#[test]
fn nested_band_exits_merge_into_the_next_stage_of_their_branch() {
    let layout = layout_of(&fixtures::nested_parallel(), &LayoutConfig::default());
    let package = named(&layout, "Package").id;
    let unit = named(&layout, "Unit").id;
    let integration = named(&layout, "Integration").id;

    let mut sources: Vec<NodeId> = layout
        .connectors
        .iter()
        .filter(|c| c.to == Endpoint::Node(package))
        .filter_map(|c| c.from.node_id())
        .collect();
    sources.sort();
    let mut expected = vec![unit, integration];
    expected.sort();
    assert_eq!(sources, expected);
}

#[test]
fn stroke_width_follows_config() {
    let layout = layout_of(&fixtures::fat(), &fat_config());
    assert!(layout.connectors.iter().all(|c| c.stroke_width == 10.0));
}

#[test]
fn tight_rows_shrink_the_curve_radius() {
    let cfg = LayoutConfigBuilder::new()
        .node_radius(4.0)
        .parallel_spacing_h(10.0)
        .build();
    let layout = layout_of(&fixtures::build_and_test(), &cfg);
    let fan = layout
        .connectors
        .iter()
        .find(|c| c.from == n(2) && c.to == n(4))
        .unwrap();

    let radii: Vec<f64> = fan
        .path
        .iter()
        .filter_map(|s| match s {
            PathSegment::Arc { radius, .. } => Some(*radius),
            _ => None,
        })
        .collect();
    assert_eq!(radii, vec![5.0, 5.0]);
}

#[test]
fn bends_stay_inside_the_slots_when_curves_are_wide() {
    // Curve radius at its maximum: the fan-out may not run past the
    // parallel stage's slot into the band it opens.
    let cfg = LayoutConfigBuilder::new()
        .node_spacing_h(40.0)
        .curve_radius(20.0)
        .label_char_width(0.5)
        .build();
    let layout = layout_of(&fixtures::parallel_deep(), &cfg);
    let browser = named(&layout, "Browser Tests");
    let half_slot = (cfg.node_spacing_h).max(13.0 * 0.5 + 2.0 * cfg.node_radius) / 2.0;

    for c in layout.connectors.iter().filter(|c| c.kind == ConnectorKind::FanOut) {
        for segment in &c.path {
            if let PathSegment::Line { from, to } = segment {
                if (from.x - to.x).abs() < EPS {
                    assert!(from.x <= browser.center.x + half_slot + EPS, "{c:?}");
                }
            }
        }
    }

    for c in &layout.connectors {
        for segment in &c.path {
            for p in sample(segment) {
                for node in &layout.nodes {
                    assert!(p.distance_to(node.center) >= node.radius - EPS, "{c:?} enters {}", node.id);
                }
            }
        }
    }
}

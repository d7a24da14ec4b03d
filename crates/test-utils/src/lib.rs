pub mod builders;
pub mod fixtures;

use std::sync::Once;

use pipeline_layout::config::LayoutConfig;
use pipeline_layout::layout::{GraphLayout, PositionedNode};
use pipeline_layout::model::{NodeId, StageNode};
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Lay out stages with `cfg`, panicking on error.
pub fn layout_of(stages: &[StageNode], cfg: &LayoutConfig) -> GraphLayout {
    pipeline_layout::layout_stages(stages, cfg).expect("layout failed")
}

/// Look up a node that must be present.
pub fn node(layout: &GraphLayout, id: u32) -> &PositionedNode {
    layout
        .node(NodeId(id))
        .unwrap_or_else(|| panic!("node {id} missing from layout"))
}

/// Find the single node with `name` in a layout (for fixtures without
/// duplicate names).
pub fn named<'a>(layout: &'a GraphLayout, name: &str) -> &'a PositionedNode {
    let mut matches = layout.nodes.iter().filter(|n| n.name == name);
    let found = matches
        .next()
        .unwrap_or_else(|| panic!("no node named {name:?}"));
    assert!(matches.next().is_none(), "name {name:?} is not unique");
    found
}

#![allow(dead_code)]

use pipeline_layout::config::{LayoutConfig, RawLayoutConfig};
use pipeline_layout::model::{sequence, IdAllocator, StageNode};
use pipeline_layout::types::StageState;

/// Hands out stages with fresh ids, like the dashboard's demo data helpers.
#[derive(Debug, Default)]
pub struct StageFactory {
    ids: IdAllocator,
}

impl StageFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A leaf stage in the default (`not_built`) state.
    pub fn node(&mut self, name: &str) -> StageNode {
        self.ids.node(name)
    }

    pub fn node_with(&mut self, name: &str, state: StageState) -> StageNode {
        self.ids.node(name).with_state(state)
    }

    /// A stage with an upstream state string, recognized or not.
    pub fn node_raw(&mut self, name: &str, state: &str) -> StageNode {
        self.ids.node(name).with_state(state)
    }

    pub fn running(&mut self, name: &str, percent: i32) -> StageNode {
        self.ids
            .node(name)
            .with_state(StageState::Running)
            .with_progress(percent)
    }

    /// A stage whose children become parallel branches.
    pub fn parallel(&mut self, name: &str, children: Vec<StageNode>) -> StageNode {
        self.ids.node(name).with_children(children)
    }

    pub fn parallel_with(
        &mut self,
        name: &str,
        state: StageState,
        children: Vec<StageNode>,
    ) -> StageNode {
        self.parallel(name, children).with_state(state)
    }

    /// Chain stages and return the head.
    pub fn sequence(&mut self, stages: Vec<StageNode>) -> StageNode {
        sequence(stages).expect("sequence needs at least one stage")
    }

    /// A chain of `len` fresh stages named `"<prefix> i of len"`.
    pub fn chain(&mut self, prefix: &str, len: usize) -> StageNode {
        let stages = (1..=len)
            .map(|i| self.node(&format!("{prefix} {i} of {len}")))
            .collect();
        self.sequence(stages)
    }
}

/// Builder for `LayoutConfig` to simplify test setup.
#[derive(Debug, Default)]
pub struct LayoutConfigBuilder {
    raw: RawLayoutConfig,
}

impl LayoutConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_spacing_h(mut self, v: f64) -> Self {
        self.raw.node_spacing_h = Some(v);
        self
    }

    pub fn parallel_spacing_h(mut self, v: f64) -> Self {
        self.raw.parallel_spacing_h = Some(v);
        self
    }

    pub fn node_radius(mut self, v: f64) -> Self {
        self.raw.node_radius = Some(v);
        self
    }

    pub fn curve_radius(mut self, v: f64) -> Self {
        self.raw.curve_radius = Some(v);
        self
    }

    pub fn connector_stroke_width(mut self, v: f64) -> Self {
        self.raw.connector_stroke_width = Some(v);
        self
    }

    pub fn hit_slop(mut self, v: f64) -> Self {
        self.raw.hit_slop = Some(v);
        self
    }

    pub fn label_char_width(mut self, v: f64) -> Self {
        self.raw.label_char_width = Some(v);
        self
    }

    pub fn max_depth(mut self, v: usize) -> Self {
        self.raw.max_depth = Some(v);
        self
    }

    pub fn build(self) -> LayoutConfig {
        LayoutConfig::try_from(self.raw).expect("Failed to build valid layout config from builder")
    }
}

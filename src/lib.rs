// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod layout;
pub mod logging;
pub mod model;
pub mod overlay;
pub mod route;
pub mod types;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_or_default, LayoutConfig};
use crate::layout::GraphLayout;
use crate::model::{normalize, NodeId, NormalizeOptions, StageInput, StageNode, StageTree};
use crate::overlay::{hit_test, render_state, RenderModel};
use crate::types::OutputFormat;

/// Normalize caller-supplied stages and lay them out in one go.
pub fn layout_stages(stages: &[StageNode], cfg: &LayoutConfig) -> errors::Result<GraphLayout> {
    let tree = normalize(stages, &NormalizeOptions::from(cfg))?;
    layout::solve(&tree, cfg)
}

/// Read stage data (nested or flat JSON) from disk and normalize it.
pub fn load_stage_tree(path: impl AsRef<Path>, cfg: &LayoutConfig) -> errors::Result<StageTree> {
    let contents = fs::read_to_string(path.as_ref())?;
    StageInput::from_json(&contents)?.into_tree(&NormalizeOptions::from(cfg))
}

#[derive(Debug, Serialize)]
struct CliOutput {
    #[serde(flatten)]
    render: RenderModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    hit: Option<NodeId>,
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - stage input loading + normalization
/// - layout + routing
/// - selection / hit-test overlay
/// - output
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(args.config.as_deref().map(Path::new))
        .with_context(|| format!("loading layout config {:?}", args.config))?;

    let tree = load_stage_tree(&args.input, &cfg)
        .with_context(|| format!("loading stages from {:?}", args.input))?;
    info!(stages = tree.len(), depth = tree.max_depth(), "stage tree loaded");

    if args.dry_run {
        print_dry_run(&tree);
        return Ok(());
    }

    let layout = layout::solve(&tree, &cfg)?;
    let render = render_state(&layout, args.select.map(NodeId));

    let hit = args.hit.and_then(|point| {
        let node = hit_test(&layout, point, &cfg);
        debug!(x = point.x, y = point.y, hit = ?node.map(|n| n.id), "resolved pointer");
        node.map(|n| n.id)
    });

    match args.format {
        OutputFormat::Json => {
            let out = CliOutput { render, hit };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => print_text(&render, hit),
    }

    Ok(())
}

/// Dry-run output: the normalized tree, indented by nesting.
fn print_dry_run(tree: &StageTree) {
    println!("pipeline-layout dry-run");
    println!("  stages: {}", tree.len());
    println!("  max depth: {}", tree.max_depth());
    println!();

    fn print_sequence(seq: &model::Sequence, indent: usize) {
        for stage in &seq.stages {
            println!(
                "{:indent$}- {} {} [{}]",
                "",
                stage.id,
                stage.name,
                stage.state,
                indent = indent
            );
            for (k, branch) in stage.branches.iter().enumerate() {
                println!("{:indent$}  branch {k}:", "", indent = indent);
                print_sequence(branch, indent + 4);
            }
        }
    }
    print_sequence(&tree.stages, 2);

    debug!("dry-run complete (no layout)");
}

fn print_text(render: &RenderModel, hit: Option<NodeId>) {
    let layout = &render.layout;
    println!(
        "layout {:.0}x{:.0}, {} nodes, {} connectors",
        layout.width,
        layout.height,
        layout.nodes.len(),
        layout.connectors.len()
    );
    for (node, visual) in layout.nodes.iter().zip(&render.nodes) {
        let marker = if visual.selected { "*" } else { " " };
        println!(
            "{marker} {:>5} ({:>7.1}, {:>6.1}) {:?} {}",
            node.id.to_string(),
            node.center.x,
            node.center.y,
            visual.status,
            node.name
        );
    }
    if let Some(id) = hit {
        println!("hit: {id}");
    }
}

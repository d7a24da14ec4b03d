//! The dashboard's pipeline graph demo scenarios, as stage data.
//!
//! Each function uses its own [`StageFactory`], so ids start at 1.

use pipeline_layout::model::{NodeId, StageNode};
use pipeline_layout::types::StageState::{
    Aborted, Failure, NotBuilt, Queued, Running, Skipped, Success, Unstable,
};

use crate::builders::StageFactory;

/// `[Build, Test { JUnit, DBUnit }]` with ids 1 to 4 in reading order.
pub fn build_and_test() -> Vec<StageNode> {
    vec![
        StageNode::new(NodeId(1), "Build"),
        StageNode::new(NodeId(2), "Test").with_children(vec![
            StageNode::new(NodeId(3), "JUnit"),
            StageNode::new(NodeId(4), "DBUnit"),
        ]),
    ]
}

/// One stage per state, plus an upstream value nobody recognizes.
pub fn flat_pipeline() -> Vec<StageNode> {
    let mut f = StageFactory::new();
    vec![
        f.node_with("Success", Success),
        f.node_with("Failure", Failure),
        f.node_with("Running", Running),
        f.running("Slow", 150),
        f.node_with("Queued", Queued),
        f.node_with("Unstable", Unstable),
        f.node_with("Aborted", Aborted),
        f.node_with("Not Built", NotBuilt),
        f.node_raw("Bad data", "this is not my office"),
    ]
}

pub fn duplicate_names() -> Vec<StageNode> {
    let mut f = StageFactory::new();
    let build = f.node("Build");
    let test = f.node("Test");
    let ie = f.node("Internet Explorer");
    let chrome = f.node("Chrome");
    let browser = f.parallel("Browser Tests", vec![ie, chrome]);
    vec![
        build,
        test,
        browser,
        f.node("Test"),
        f.node("Staging"),
        f.node("Production"),
    ]
}

pub fn fat() -> Vec<StageNode> {
    let mut f = StageFactory::new();
    let success = f.node_with("Success", Success);
    let failure = f.node_with("Failure", Failure);
    let jobs_running = (1..=3)
        .map(|i| f.node_with(&format!("Job {i}"), Running))
        .collect();
    let running = f.parallel("Running", jobs_running);
    let jobs_queued = (4..=8)
        .map(|i| f.node_with(&format!("Job {i}"), Queued))
        .collect();
    let queued = f.parallel("Queued", jobs_queued);
    vec![
        success,
        failure,
        running,
        queued,
        f.node_with("Not Built", NotBuilt),
        f.node_raw("Bad data", "this is not my office"),
    ]
}

pub fn listeners() -> Vec<StageNode> {
    let mut f = StageFactory::new();
    let build = f.node_with("Build", Success);
    let test = f.node_with("Test", Success);
    let ie = f.node_with("Internet Explorer", Queued);
    let chrome = f.node_with("Chrome", Queued);
    let browser = f.parallel("Browser Tests", vec![ie, chrome]);
    vec![
        build,
        test,
        browser,
        f.node("Dev"),
        f.node("Dev"),
        f.node("Staging"),
        f.node("Production"),
    ]
}

pub fn parallel() -> Vec<StageNode> {
    let mut f = StageFactory::new();
    let build = f.node("Build");
    let test = f.node("Test");
    let ie = f.node("Internet Explorer");
    let chrome = f.node("Chrome");
    let browser = f.parallel("Browser Tests", vec![ie, chrome]);
    vec![
        build,
        test,
        browser,
        f.node("Dev but with long label"),
        f.node("Staging"),
        f.node("Production"),
    ]
}

/// Single-node branches mixed with chains of 3, 2 and 4.
pub fn multi_stage_parallel() -> Vec<StageNode> {
    let mut f = StageFactory::new();
    let alpha = f.node("Alpha");
    let branches = vec![
        f.node("Single 1"),
        f.node("Single 2"),
        f.node("Single 3"),
        f.chain("Multi", 3),
        f.chain("Multi", 2),
        f.chain("Multi", 4),
        f.node("Single 4"),
    ];
    let bravo = f.parallel("Bravo", branches);
    vec![alpha, bravo, f.node("Charlie"), f.node("Delta")]
}

pub fn multi_stage_spacing() -> Vec<StageNode> {
    let mut f = StageFactory::new();
    let homer = f.node("Homer");
    let marge = f.node("Marge");
    let alpha = f.parallel("Alpha", vec![homer, marge]);
    let blue = f.node("Blue");
    let single = f.node("Single 1");
    let wide = {
        let xs = (0..3).map(|_| f.node("xxxxxxxxxxxxxxxxxxxxxxxxxx")).collect();
        f.sequence(xs)
    };
    let multi = f.chain("Multi", 4);
    let bravo = f.parallel("Bravo", vec![single, wide, multi]);
    vec![alpha, blue, bravo]
}

/// Branches of varying length on both sides of a skipped stage.
pub fn ragged_edges() -> Vec<StageNode> {
    let mut f = StageFactory::new();
    let alpha_branches = vec![
        f.node("Single 1"),
        f.chain("Multi", 3),
        f.chain("Multi", 2),
        f.node("Single 2"),
    ];
    let alpha = f.parallel("Alpha", alpha_branches);
    let bravo = f.node_with("Bravo", Skipped);
    let charlie_branches = vec![f.node("Single 1"), f.chain("Multi", 2), f.node("Single 2")];
    let charlie = f.parallel("Charlie", charlie_branches);
    vec![alpha, bravo, charlie]
}

pub fn long_names() -> Vec<StageNode> {
    let mut f = StageFactory::new();
    let build = f.node_with(
        "Build something with a long and descriptive name that takes up a lot of space",
        Success,
    );
    let test_branches = vec![
        f.node_with("JUnit", Success),
        f.node_with("DBUnit", Success),
        f.node_with("Jasmine", Success),
    ];
    let test = f.parallel("Test", test_branches);
    let browser_branches = vec![
        f.node_with("Firefox", Success),
        f.node_with(
            "Das komputermaschine ist nicht auf mittengraben unt die gerfingerpoken. Watchen das blinkenlights.",
            Failure,
        ),
        f.running("RubberbabybuggybumpersbetyoudidntknowIwasgoingtodothat", 60),
        f.running("Chrome", 120),
    ];
    let browser = f.parallel("Browser Tests", browser_branches);
    vec![
        build,
        test,
        browser,
        f.node("Dev"),
        f.node("Staging"),
        f.node("Production"),
    ]
}

pub fn parallel_deep() -> Vec<StageNode> {
    let mut f = StageFactory::new();
    let build = f.node_with("Build", Success);
    let test = f.node_with("Test", Success);
    let branches = vec![
        f.node_with("Internet Explorer", Success),
        f.node_with("Firefox", Running),
        f.node_with("Edge", Failure),
        f.node_with("Safari", Running),
        f.node_with("LOLpera", Queued),
        f.node_with("Chrome", Queued),
    ];
    let browser = f.parallel("Browser Tests", branches);
    vec![
        build,
        test,
        browser,
        f.node_with("Dev", NotBuilt),
        f.node_with("Staging", NotBuilt),
        f.node_with("Production", NotBuilt),
    ]
}

pub fn mixed() -> Vec<StageNode> {
    let mut f = StageFactory::new();
    let build = f.node_with("Build", Success);
    let test_branches = vec![
        f.node_with("JUnit", Success),
        f.node_with("DBUnit", Success),
        f.node_with("Jasmine", Success),
    ];
    let test = f.parallel("Test", test_branches);
    let browser_branches = vec![
        f.node_with("Firefox", Success),
        f.node_with("Edge", Failure),
        f.running("Safari", 60),
        f.running("Chrome", 120),
    ];
    let browser = f.parallel("Browser Tests", browser_branches);
    let skizzled = f.node_with("Skizzled", Skipped);
    let foshizzle = f.node_with("Foshizzle", Skipped);
    let dev_branches = vec![
        f.node_with("US-East", Success),
        f.node_with("US-West", Success),
        f.node_with("APAC", Success),
    ];
    let dev = f.parallel_with("Dev", Success, dev_branches);
    vec![
        build,
        test,
        browser,
        skizzled,
        foshizzle,
        dev,
        f.node_with("Staging", Skipped),
        f.node("Production"),
    ]
}

/// A parallel group nested inside a branch chain.
pub fn nested_parallel() -> Vec<StageNode> {
    let mut f = StageFactory::new();
    let checkout = f.node("Checkout");
    let compile = f.node("Compile");
    let unit = f.node("Unit");
    let it = f.node("Integration");
    let tests = f.parallel("Tests", vec![unit, it]);
    let package = f.node("Package");
    let linux = f.sequence(vec![compile, tests, package]);
    let windows = f.node("Windows");
    let platforms = f.parallel("Platforms", vec![linux, windows]);
    vec![checkout, platforms, f.node("Publish")]
}

/// Every scenario, by name.
pub fn all() -> Vec<(&'static str, Vec<StageNode>)> {
    vec![
        ("build_and_test", build_and_test()),
        ("flat_pipeline", flat_pipeline()),
        ("duplicate_names", duplicate_names()),
        ("fat", fat()),
        ("listeners", listeners()),
        ("parallel", parallel()),
        ("multi_stage_parallel", multi_stage_parallel()),
        ("multi_stage_spacing", multi_stage_spacing()),
        ("ragged_edges", ragged_edges()),
        ("long_names", long_names()),
        ("parallel_deep", parallel_deep()),
        ("mixed", mixed()),
        ("nested_parallel", nested_parallel()),
    ]
}

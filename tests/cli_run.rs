use std::io::Write;

use clap::Parser;
use pipeline_layout::cli::CliArgs;
use pipeline_layout::errors::{LayoutError, StructuralError};
use pipeline_layout::types::OutputFormat;
use pipeline_layout::{load_stage_tree, run};
use pipeline_layout::config::LayoutConfig;
use tempfile::NamedTempFile;

const NESTED: &str = r#"[
    {"id": 1, "name": "Build", "state": "success"},
    {"id": 2, "name": "Test", "state": "running", "completePercent": 30,
     "children": [{"id": 3, "name": "JUnit"}, {"id": 4, "name": "DBUnit"}]}
]"#;

const CYCLIC: &str = r#"{
    "stages": [
        {"id": 1, "name": "Build", "nextSibling": 2},
        {"id": 2, "name": "Test", "nextSibling": 1}
    ],
    "roots": [1]
}"#;

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["pipeline-layout"];
    argv.extend_from_slice(extra);
    CliArgs::try_parse_from(argv).expect("valid arguments")
}

#[test]
fn arguments_parse_with_defaults() {
    let parsed = args(&["--input", "stages.json"]);

    assert_eq!(parsed.input, "stages.json");
    assert_eq!(parsed.config, None);
    assert_eq!(parsed.format, OutputFormat::Json);
    assert!(parsed.hit.is_none());
    assert!(!parsed.dry_run);
}

#[test]
fn hit_point_is_parsed() {
    let parsed = args(&["--input", "s.json", "--hit", "180, 55.5", "--select", "2"]);
    let hit = parsed.hit.unwrap();

    assert_eq!((hit.x, hit.y), (180.0, 55.5));
    assert_eq!(parsed.select, Some(2));
}

#[test]
fn malformed_hit_point_is_rejected() {
    assert!(CliArgs::try_parse_from(["pipeline-layout", "--input", "s.json", "--hit", "180"]).is_err());
    assert!(CliArgs::try_parse_from(["pipeline-layout", "--input", "s.json", "--hit", "a,b"]).is_err());
}

#[test]
fn input_is_required() {
    assert!(CliArgs::try_parse_from(["pipeline-layout"]).is_err());
}

#[test]
fn run_lays_out_a_file() {
    let input = temp_file(NESTED);
    let path = input.path().to_str().unwrap();

    run(args(&["--input", path, "--select", "2", "--hit", "420,175"])).unwrap();
    run(args(&["--input", path, "--format", "text"])).unwrap();
}

#[test]
fn run_with_config_file() {
    let input = temp_file(NESTED);
    let config = temp_file("node_spacing_h = 90\ncurve_radius = 10\n");

    run(args(&[
        "--input",
        input.path().to_str().unwrap(),
        "--config",
        config.path().to_str().unwrap(),
    ]))
    .unwrap();
}

#[test]
fn dry_run_stops_before_layout() {
    let input = temp_file(NESTED);
    run(args(&["--input", input.path().to_str().unwrap(), "--dry-run"])).unwrap();
}

#[test]
fn invalid_config_fails_the_run() {
    let input = temp_file(NESTED);
    let config = temp_file("node_radius = -1\n");

    let err = run(args(&[
        "--input",
        input.path().to_str().unwrap(),
        "--config",
        config.path().to_str().unwrap(),
    ]))
    .unwrap_err();
    assert!(format!("{err:#}").contains("node_radius"), "{err:#}");
}

#[test]
fn cyclic_input_fails_the_run() {
    let input = temp_file(CYCLIC);
    let path = input.path().to_str().unwrap();

    assert!(run(args(&["--input", path])).is_err());

    match load_stage_tree(path, &LayoutConfig::default()) {
        Err(LayoutError::Structural(StructuralError::Cycle { .. })) => {}
        other => panic!("expected a cycle error, got {other:?}"),
    }
}

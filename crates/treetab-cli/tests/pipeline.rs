//! End-to-end tests for the CLI command implementations.

use std::fs;
use std::path::PathBuf;

use treetab_cli::cli::{DelimiterArg, EncodingArg, ExportArgs, SchemaArgs};
use treetab_cli::commands::{run_export, run_schema};
use treetab_model::RecordNode;

fn scratch_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("treetab-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir.join(name)
}

fn write_series_tree(name: &str) -> PathBuf {
    let mut first = RecordNode::with_label("deposition", "20B-042");
    first.push_item("number", "1");
    first.push_item("date", "2020-01-01");
    let mut second = RecordNode::with_label("deposition", "20B-043");
    second.push_item("number", "2");
    second.push_item("date", "2020-01-02");
    let mut root = RecordNode::new("sample series");
    root.push_child(first);
    root.push_child(second);

    let path = scratch_path(name);
    fs::write(&path, serde_json::to_vec(&root).expect("serialize tree")).expect("write tree");
    path
}

fn export_args(tree: PathBuf, columns: &[&str], output: PathBuf) -> ExportArgs {
    ExportArgs {
        tree,
        columns: columns.iter().map(|c| (*c).to_string()).collect(),
        delimiter: DelimiterArg::Tab,
        encoding: EncodingArg::Utf8,
        output: Some(output),
        label_heading: "sample".to_string(),
        ignore_labels: false,
    }
}

#[test]
fn exports_selected_columns_with_labels() {
    let tree = write_series_tree("labels.json");
    let output = scratch_path("labels.csv");

    let written = run_export(&export_args(tree, &["0", "1"], output.clone())).unwrap();

    assert_eq!(written, output);
    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(
        text,
        "sample\tnumber\tdate\n20B-042\t1\t2020-01-01\n20B-043\t2\t2020-01-02\n"
    );
}

#[test]
fn ignore_labels_drops_the_leading_column() {
    let tree = write_series_tree("no-labels.json");
    let output = scratch_path("no-labels.csv");
    let mut args = export_args(tree, &["0"], output.clone());
    args.ignore_labels = true;

    run_export(&args).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text, "number\n1\n2\n");
}

#[test]
fn non_numeric_column_selection_fails_without_writing() {
    let tree = write_series_tree("bad-selection.json");
    let output = scratch_path("bad-selection.csv");

    let error = run_export(&export_args(tree, &["0", "first"], output.clone())).unwrap_err();

    assert!(error.to_string().contains("invalid column index"));
    assert!(!output.exists());
}

#[test]
fn schema_listing_succeeds() {
    let tree = write_series_tree("schema.json");
    let args = SchemaArgs {
        tree,
        groups: Vec::new(),
    };
    run_schema(&args).unwrap();
}

#[test]
fn missing_tree_file_is_reported_with_its_path() {
    let args = SchemaArgs {
        tree: scratch_path("does-not-exist.json"),
        groups: Vec::new(),
    };
    let error = run_schema(&args).unwrap_err();
    assert!(error.to_string().contains("does-not-exist.json"));
}

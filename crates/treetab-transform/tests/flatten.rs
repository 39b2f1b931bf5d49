//! Tests for row-tree flattening.

use treetab_model::{CellValue, RecordNode};
use treetab_transform::flatten;

#[test]
fn one_flat_row_per_row_tree() {
    let mut root = RecordNode::new("sample series");
    root.push_child(RecordNode::with_label("sample", "14-TB-001"));
    root.push_child(RecordNode::with_label("sample", "14-TB-002"));

    let rows = flatten(&root);
    assert_eq!(rows.len(), 2);
}

#[test]
fn nested_nodes_merge_into_the_row_map() {
    let mut layer = RecordNode::new("layer");
    layer.push_item("thickness", "350 nm");
    let mut deposition = RecordNode::new("deposition");
    deposition.push_item("number", "1");
    deposition.push_child(layer);
    let mut root = RecordNode::new("sample");
    root.push_child(deposition);

    let rows = flatten(&root);

    let row = &rows[0];
    assert_eq!(row["deposition"]["number"], "1");
    assert_eq!(row["layer"]["thickness"], "350 nm");
}

#[test]
fn row_map_keys_are_only_the_groups_of_that_row_tree() {
    let mut deposition = RecordNode::new("deposition");
    deposition.push_item("number", "1");
    let mut measurement = RecordNode::new("measurement");
    measurement.push_item("value", "3.4");
    let mut root = RecordNode::new("sample");
    root.push_child(deposition);
    root.push_child(measurement);

    let rows = flatten(&root);

    assert!(rows[0].contains_key("deposition"));
    assert!(!rows[0].contains_key("measurement"));
    assert!(rows[1].contains_key("measurement"));
    assert!(!rows[1].contains_key("deposition"));
}

#[test]
fn missing_values_flatten_to_empty_strings() {
    let mut deposition = RecordNode::new("deposition");
    deposition.push_item("comment", CellValue::Missing);
    let mut root = RecordNode::new("sample");
    root.push_child(deposition);

    let rows = flatten(&root);
    assert_eq!(rows[0]["deposition"]["comment"], "");
}

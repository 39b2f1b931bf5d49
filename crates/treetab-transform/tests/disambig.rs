//! Tests for name disambiguation.

use treetab_model::RecordNode;
use treetab_transform::{DEFAULT_RENAMING_OFFSET, disambiguate};

fn deposition_with_layers(layer_names: &[&str]) -> RecordNode {
    let mut deposition = RecordNode::new("deposition");
    for name in layer_names {
        deposition.push_child(RecordNode::new(*name));
    }
    deposition
}

#[test]
fn first_sibling_stays_bare_second_gets_number() {
    let mut root = RecordNode::new("sample");
    root.push_child(deposition_with_layers(&["layer", "layer"]));

    disambiguate(&mut root, DEFAULT_RENAMING_OFFSET);

    let layers = &root.children[0].children;
    assert_eq!(layers[0].type_name, "layer");
    assert_eq!(layers[1].type_name, "layer #2");
}

#[test]
fn numbering_counts_occurrences_not_positions() {
    let mut root = RecordNode::new("sample");
    root.push_child(deposition_with_layers(&["layer", "cleaning", "layer", "layer"]));

    disambiguate(&mut root, DEFAULT_RENAMING_OFFSET);

    let children = &root.children[0].children;
    assert_eq!(children[0].type_name, "layer");
    assert_eq!(children[1].type_name, "cleaning");
    assert_eq!(children[2].type_name, "layer #2");
    assert_eq!(children[3].type_name, "layer #3");
}

#[test]
fn uniquely_named_child_is_untouched() {
    let mut root = RecordNode::new("sample");
    root.push_child(deposition_with_layers(&["layer"]));

    disambiguate(&mut root, DEFAULT_RENAMING_OFFSET);

    assert_eq!(root.children[0].children[0].type_name, "layer");
}

#[test]
fn row_nodes_are_never_numbered() {
    // Same-named row trees must keep their bare names so they align into
    // one column group.
    let mut root = RecordNode::new("sample");
    root.push_child(RecordNode::new("deposition"));
    root.push_child(RecordNode::new("deposition"));

    disambiguate(&mut root, DEFAULT_RENAMING_OFFSET);

    assert_eq!(root.children[0].type_name, "deposition");
    assert_eq!(root.children[1].type_name, "deposition");
}

#[test]
fn deeper_levels_get_ancestor_prefixes() {
    let mut layer_a = RecordNode::new("layer");
    layer_a.push_child(RecordNode::new("channel"));
    layer_a.push_child(RecordNode::new("channel"));
    let mut layer_b = RecordNode::new("layer");
    layer_b.push_child(RecordNode::new("channel"));
    let mut deposition = RecordNode::new("deposition");
    deposition.push_child(layer_a);
    deposition.push_child(layer_b);
    let mut root = RecordNode::new("sample");
    root.push_child(deposition);

    disambiguate(&mut root, DEFAULT_RENAMING_OFFSET);

    let layers = &root.children[0].children;
    assert_eq!(layers[0].type_name, "layer");
    assert_eq!(layers[1].type_name, "layer #2");
    // Grandchildren of the row node carry the (already disambiguated)
    // parent name as prefix.
    assert_eq!(layers[0].children[0].type_name, "layer, channel");
    assert_eq!(layers[0].children[1].type_name, "layer, channel #2");
    assert_eq!(layers[1].children[0].type_name, "layer #2, channel");
}

#[test]
fn offset_zero_numbers_the_direct_children() {
    let mut root = deposition_with_layers(&["layer", "layer"]);

    disambiguate(&mut root, 0);

    assert_eq!(root.children[0].type_name, "layer");
    assert_eq!(root.children[1].type_name, "layer #2");
}

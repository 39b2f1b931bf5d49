//! Row-tree flattening for cell value lookup.

use std::collections::BTreeMap;

use treetab_model::RecordNode;

/// One flattened table row: group name → key → cell text.
///
/// The keys are exactly the type names present in that particular row tree,
/// not the global set of column groups; groups that don't apply to a row are
/// simply absent and resolve to empty cells at lookup time.
pub type FlatRow = BTreeMap<String, BTreeMap<String, String>>;

/// Convert each row tree (direct child of `root`) into a [`FlatRow`].
///
/// A pure recursive merge with no positional awareness; missing values
/// become `""`. The tree must already be disambiguated, otherwise
/// same-named nodes overwrite each other here.
pub fn flatten(root: &RecordNode) -> Vec<FlatRow> {
    root.children
        .iter()
        .map(|row_tree| {
            let mut row = FlatRow::new();
            flatten_row_tree(row_tree, &mut row);
            row
        })
        .collect()
}

fn flatten_row_tree(node: &RecordNode, row: &mut FlatRow) {
    let items = node
        .items
        .iter()
        .map(|item| (item.key.clone(), item.value.as_str().to_string()))
        .collect();
    row.insert(node.type_name.clone(), items);
    for child in &node.children {
        flatten_row_tree(child, row);
    }
}

//! Column schema unification over a forest of row trees.
//!
//! Two parallel structures describe the table layout. The column group list
//! is the union of the nodes of all row trees, without duplicates: the first
//! row tree is walked and each of its nodes becomes a group; later trees
//! only contribute *new* names, spliced in next to the groups they were
//! encountered beside so the overall order stays sensible. The flat column
//! list is built alongside; a group stores, per item key, the index into it.
//!
//! Items inherited from a shared base type (non-empty `origin`) are unified:
//! the first group to carry a given `(origin, key)` pair allocates the
//! column, every later group reuses its index and is recorded as an
//! additional owner. This is restricted to row nodes; below the row root,
//! nesting already disambiguates the semantics, so no merge happens there.

use std::collections::{HashMap, HashSet};

use crate::flatten::FlatRow;
use treetab_model::RecordNode;

/// The set of columns contributed by all nodes of one disambiguated type
/// name. Groups sit next to each other in the final table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGroup {
    pub name: String,
    /// Item key → index into the flat column list, in item order.
    pub key_indices: Vec<(String, usize)>,
}

impl ColumnGroup {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_indices: Vec::new(),
        }
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.key_indices
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|&(_, index)| index)
    }

    /// The global column indices of this group, ascending.
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.key_indices.iter().map(|&(_, index)| index).collect();
        indices.sort_unstable();
        indices
    }
}

/// One column of the exported table.
///
/// `group_names` normally holds exactly one entry. For shared columns it
/// holds every owning group, and the value of a row is taken from the first
/// owning group present in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub group_names: Vec<String>,
    /// The pristine key name, without any disambiguation affixes.
    pub key: String,
    /// The column heading: the key itself, unless the key collides with
    /// another column's key somewhere in the table.
    pub heading: String,
}

impl Column {
    fn new(group_name: impl Into<String>, key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            group_names: vec![group_name.into()],
            heading: key.clone(),
            key,
        }
    }

    fn append_group_name(&mut self, group_name: impl Into<String>) {
        self.group_names.push(group_name.into());
    }

    fn disambiguate_heading(&mut self) {
        self.heading = format!("{} {{{}}}", self.key, self.group_names.join(" / "));
    }

    /// The cell value of this column in the given row: the value under this
    /// column's key from the first owning group present in the row, or `""`
    /// when none of the owning groups apply to it.
    pub fn value_in<'a>(&self, row: &'a FlatRow) -> &'a str {
        for group_name in &self.group_names {
            if let Some(items) = row.get(group_name) {
                return items.get(&self.key).map_or("", String::as_str);
            }
        }
        ""
    }
}

/// The unified table layout: ordered column groups plus the flat column
/// list their `key_indices` point into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub column_groups: Vec<ColumnGroup>,
    pub columns: Vec<Column>,
}

impl Schema {
    pub fn group(&self, name: &str) -> Option<&ColumnGroup> {
        self.column_groups.iter().find(|group| group.name == name)
    }
}

/// Build the column schema for a complete export tree.
///
/// The tree must already be disambiguated and key-completed; the direct
/// children of `root` are the row trees. Nodes are visited in document
/// order (pre-order), and only the row node itself takes part in
/// shared-column unification.
pub fn build_schema(root: &RecordNode) -> Schema {
    let mut column_groups: Vec<ColumnGroup> = Vec::new();
    let mut columns: Vec<Column> = Vec::new();
    // Side index (origin, key) → column index, discarded with the build.
    let mut shared_columns: HashMap<(String, String), usize> = HashMap::new();
    let mut position = 0;
    for (row, row_tree) in root.children.iter().enumerate() {
        let mut nodes = Vec::new();
        walk_row_tree(row_tree, true, &mut nodes);
        for (node, top_level) in nodes {
            let existing = if row > 0 {
                column_groups
                    .iter()
                    .position(|group| group.name == node.type_name)
            } else {
                None
            };
            if let Some(index) = existing {
                // Later row trees reuse the established positions instead of
                // appending duplicate groups.
                position = index;
            } else {
                let name = node.type_name.as_str();
                let mut column_group = ColumnGroup::new(name);
                for item in &node.items {
                    if top_level
                        && let Some(origin) = &item.origin
                    {
                        let shared_key = (origin.clone(), item.key.clone());
                        if let Some(&index) = shared_columns.get(&shared_key) {
                            column_group.key_indices.push((item.key.clone(), index));
                            columns[index].append_group_name(name);
                            continue;
                        }
                        shared_columns.insert(shared_key, columns.len());
                    }
                    column_group
                        .key_indices
                        .push((item.key.clone(), columns.len()));
                    columns.push(Column::new(name, &item.key));
                }
                column_groups.insert(position, column_group);
            }
            position += 1;
        }
    }
    disambiguate_headings(&mut columns);
    Schema {
        column_groups,
        columns,
    }
}

fn walk_row_tree<'a>(
    node: &'a RecordNode,
    top_level: bool,
    nodes: &mut Vec<(&'a RecordNode, bool)>,
) {
    nodes.push((node, top_level));
    for child in &node.children {
        walk_row_tree(child, false, nodes);
    }
}

/// Rewrite the heading of every column whose pristine key occurs on another
/// column as well; unique keys keep the bare key as heading.
fn disambiguate_headings(columns: &mut [Column]) {
    let mut seen = HashSet::new();
    let mut duplicates = HashSet::new();
    for column in columns.iter() {
        if !seen.insert(column.key.as_str()) {
            duplicates.insert(column.key.clone());
        }
    }
    for column in columns.iter_mut() {
        if duplicates.contains(&column.key) {
            column.disambiguate_heading();
        }
    }
}

//! Key-set completion across same-named nodes.
//!
//! Some node kinds have no strict item set: a free-form result process
//! carries whatever keys the operator gave it. The schema builder takes the
//! *first* node of a given name and turns its items into columns, so if a
//! later node of the same name carries extra keys, cell lookup for those
//! keys would have nothing to find. This pass gives every node the union of
//! the item keys seen on any node bearing its name, padding the gaps with
//! empty values.
//!
//! It must run after name disambiguation: completion is only meaningful
//! within one column group, and the groups are keyed by the disambiguated
//! names. `"nice result"` and `"nice result #2"` need not share keys; two
//! `"nice result #2"` nodes of different row trees must.

use std::collections::{BTreeMap, BTreeSet};

use treetab_model::{CellValue, DataItem, RecordNode};

type KeySet = BTreeSet<(String, Option<String>)>;

/// Ensure all nodes sharing a type name expose the same `(key, origin)`
/// pairs, appending missing ones with an empty text value.
///
/// Strictly two-phase: the union per name is collected over the whole tree
/// before any node is touched, because a node early in traversal order may
/// lack a key that only appears on a later node of the same name. Running
/// it twice is a no-op. If two same-named nodes legitimately mean different
/// things by one key, that is an upstream modeling error; this pass pads
/// silently.
pub fn complete(root: &mut RecordNode) {
    let mut key_sets: BTreeMap<String, KeySet> = BTreeMap::new();
    collect_key_sets(root, &mut key_sets);
    fill_missing_items(root, &key_sets);
}

fn collect_key_sets(node: &RecordNode, key_sets: &mut BTreeMap<String, KeySet>) {
    let entry = key_sets.entry(node.type_name.clone()).or_default();
    for item in &node.items {
        entry.insert((item.key.clone(), item.origin.clone()));
    }
    for child in &node.children {
        collect_key_sets(child, key_sets);
    }
}

fn fill_missing_items(node: &mut RecordNode, key_sets: &BTreeMap<String, KeySet>) {
    if let Some(expected) = key_sets.get(&node.type_name) {
        for (key, origin) in expected {
            let present = node
                .items
                .iter()
                .any(|item| item.key == *key && item.origin == *origin);
            if !present {
                node.items.push(DataItem {
                    key: key.clone(),
                    value: CellValue::Text(String::new()),
                    origin: origin.clone(),
                });
            }
        }
    }
    for child in &mut node.children {
        fill_missing_items(child, key_sets);
    }
}

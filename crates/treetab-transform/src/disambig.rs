//! Name disambiguation for record trees.
//!
//! Column groups are keyed by node type name, so before a tree can be turned
//! into a table, every node within one row tree needs a unique identifying
//! name. Two rewrites achieve that: same-named siblings get a number
//! appended (`"layer #2"`), and below that, ancestor names get prepended
//! (`"deposition, layer #2"`).

use treetab_model::RecordNode;

/// Offset used for a full export tree: the row nodes directly under the root
/// keep their bare names, their children get numbered, and every level below
/// that is numbered and ancestor-prefixed.
pub const DEFAULT_RENAMING_OFFSET: i32 = 1;

/// Make all type names in the tree below `node` unambiguous.
///
/// `renaming_offset` is the number of nesting levels still to be stepped
/// down before renaming starts. At levels where the remaining offset is
/// below 1, the k-th sibling sharing a name gets `" #k"` appended (the first
/// occurrence stays bare, and a uniquely-named child is never touched). At
/// levels where it is below 0, the parent's already-rewritten name plus
/// `", "` is prepended as well.
///
/// Sibling order is insertion order; occurrence counting uses the names as
/// they were before this level's rewrite.
pub fn disambiguate(node: &mut RecordNode, renaming_offset: i32) {
    let names: Vec<String> = node
        .children
        .iter()
        .map(|child| child.type_name.clone())
        .collect();
    for (i, child) in node.children.iter_mut().enumerate() {
        if renaming_offset < 1 {
            if names.iter().filter(|name| **name == names[i]).count() > 1 {
                let occurrence = names[..i].iter().filter(|name| **name == names[i]).count() + 1;
                if occurrence > 1 {
                    child.type_name = format!("{} #{occurrence}", child.type_name);
                }
            }
            if renaming_offset < 0 {
                child.type_name = format!("{}, {}", node.type_name, child.type_name);
            }
        }
        disambiguate(child, renaming_offset - 1);
    }
}

//! The export transformation pipeline.
//!
//! Ties the stages together in their mandatory order: disambiguate names,
//! complete key sets, build the column schema, flatten the row trees. The
//! whole structure is built fresh per export request and dropped with it;
//! nothing is cached across requests.

use tracing::debug;

use crate::complete::complete;
use crate::disambig::{DEFAULT_RENAMING_OFFSET, disambiguate};
use crate::flatten::{FlatRow, flatten};
use crate::schema::{Schema, build_schema};
use treetab_model::RecordNode;

/// Everything the table generator needs: the unified schema, the flattened
/// rows, and the per-row labels taken from the row nodes' display labels.
#[derive(Debug, Clone)]
pub struct ExportPlan {
    pub schema: Schema,
    pub rows: Vec<FlatRow>,
    pub row_labels: Vec<String>,
}

/// Run the full transformation over one export tree.
///
/// Takes the tree by value: the rewrites are destructive and the tree has no
/// life beyond the request anyway.
pub fn prepare_export(mut root: RecordNode) -> ExportPlan {
    disambiguate(&mut root, DEFAULT_RENAMING_OFFSET);
    complete(&mut root);
    let schema = build_schema(&root);
    let rows = flatten(&root);
    let row_labels = root.row_labels();
    debug!(
        groups = schema.column_groups.len(),
        columns = schema.columns.len(),
        rows = rows.len(),
        "export plan prepared"
    );
    ExportPlan {
        schema,
        rows,
        row_labels,
    }
}

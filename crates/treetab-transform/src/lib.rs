//! Tree-to-table transformations for the sample export engine.
//!
//! Record data is tree-shaped, which is incompatible with the rectangular
//! table needed for CSV export. This crate performs the conversion in four
//! stages, in mandatory order:
//!
//! - **disambig**: rewrite sibling/cousin type names so every node within a
//!   row tree has a unique identifying name
//! - **complete**: give all nodes sharing one (disambiguated) name the same
//!   item key set, padding with empty values
//! - **schema**: scan the forest of row trees into an ordered list of column
//!   groups and a flat, shared-column-unified list of columns
//! - **flatten**: convert each row tree into a flat group-name → key → value
//!   mapping for cell lookup
//!
//! [`pipeline::prepare_export`] ties the stages together. **selection**
//! handles the user's column choice across the two request round-trips.
//!
//! Running the schema builder on a tree whose names were never disambiguated
//! yields undefined column alignment; callers must go through the pipeline.

pub mod complete;
pub mod disambig;
pub mod flatten;
pub mod pipeline;
pub mod schema;
pub mod selection;

pub use complete::complete;
pub use disambig::{DEFAULT_RENAMING_OFFSET, disambiguate};
pub use flatten::{FlatRow, flatten};
pub use pipeline::{ExportPlan, prepare_export};
pub use schema::{Column, ColumnGroup, Schema, build_schema};
pub use selection::{ColumnSelection, columns_for_groups, parse_column_indices};

//! Record-tree data model for tabular sample exports.
//!
//! This crate defines the in-memory representation of one exportable entity
//! (a sample, a sample series, or a single process run) as a tree of typed
//! nodes with ordered key-value items:
//!
//! - **node**: [`RecordNode`], [`DataItem`], and [`CellValue`]
//! - **error**: [`TreetabError`] and the crate-wide [`Result`] alias
//!
//! Trees are built by collaborator code (one tree per export request), fed
//! through the transformation pipeline in `treetab-transform`, and discarded
//! with the response. Nothing in here persists across requests.

pub mod error;
pub mod node;

pub use error::{Result, TreetabError};
pub use node::{CellValue, DataItem, RecordNode};

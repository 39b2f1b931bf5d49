//! Output generation for the sample export engine.
//!
//! Consumes the schema and flattened rows produced by `treetab-transform`
//! and turns them into deliverables:
//!
//! - **table**: the rectangular cell table (header row + data rows)
//! - **csv**: delimited text serialization with selectable delimiter and
//!   text encoding, written in row-sized increments
//! - **preview**: a bordered text rendering for terminal display

pub mod csv;
pub mod preview;
pub mod table;

pub use self::csv::{CsvOptions, CsvSerializer, Delimiter, TextEncoding, csv_to_string, write_csv};
pub use preview::render_preview;
pub use table::{Table, generate_table};

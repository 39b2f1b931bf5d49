//! Final table assembly from flattened rows and the column schema.

use treetab_model::{Result, TreetabError};
use treetab_transform::{Column, FlatRow};

/// The rectangular export table. Row 0 is the header; all rows have the
/// same length. Plain text cells, ready for CSV serialization or preview
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    pub fn data_rows(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }
}

/// Generate the table for the user's column selection.
///
/// `selected_indices` is taken exactly as given: duplicates and arbitrary
/// order are the caller's intent and are preserved. `row_labels` runs
/// parallel to `rows` and fills the leading label column; when every label
/// is empty (a lab notebook export, say), the label column is omitted from
/// header and data rows alike. An index outside the column list is
/// rejected up front.
pub fn generate_table(
    rows: &[FlatRow],
    columns: &[Column],
    selected_indices: &[usize],
    row_labels: &[String],
    label_heading: &str,
) -> Result<Table> {
    if let Some(&index) = selected_indices.iter().find(|&&index| index >= columns.len()) {
        return Err(TreetabError::ColumnIndexOutOfRange {
            index,
            len: columns.len(),
        });
    }
    let with_labels = row_labels.iter().any(|label| !label.is_empty());
    let mut header = Vec::with_capacity(selected_indices.len() + usize::from(with_labels));
    if with_labels {
        header.push(label_heading.to_string());
    }
    header.extend(
        selected_indices
            .iter()
            .map(|&index| columns[index].heading.clone()),
    );
    let mut table_rows = vec![header];
    for (i, row) in rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(selected_indices.len() + usize::from(with_labels));
        if with_labels {
            cells.push(row_labels.get(i).cloned().unwrap_or_default());
        }
        cells.extend(
            selected_indices
                .iter()
                .map(|&index| columns[index].value_in(row).to_string()),
        );
        table_rows.push(cells);
    }
    Ok(Table { rows: table_rows })
}

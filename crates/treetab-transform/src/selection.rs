//! User column selection across the two export round-trips.
//!
//! The caller first picks column *groups*, then — once the schema listing is
//! narrowed to those groups — the column *indices* within them. Between
//! requests, the previous selection is echoed back verbatim so a changed
//! group choice (a structural change that invalidates the index choice) can
//! be told apart from a mere re-confirmation.

use std::collections::BTreeSet;

use crate::schema::Schema;
use treetab_model::{Result, TreetabError};

/// Parse user-submitted column indices, in the order given.
///
/// A non-numeric entry is a validation failure reported back to the caller
/// ([`TreetabError::InvalidColumnIndex`]); no export is attempted then.
pub fn parse_column_indices(raw: &[String]) -> Result<Vec<usize>> {
    raw.iter()
        .map(|value| {
            value
                .trim()
                .parse::<usize>()
                .map_err(|_| TreetabError::InvalidColumnIndex {
                    value: value.clone(),
                })
        })
        .collect()
}

/// One complete selection state: chosen group names and chosen column
/// indices. Both are sets, as duplicates submitted through the selection
/// widgets carry no meaning there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSelection {
    pub column_groups: BTreeSet<String>,
    pub columns: BTreeSet<usize>,
}

impl ColumnSelection {
    pub fn new(
        column_groups: impl IntoIterator<Item = String>,
        columns: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            column_groups: column_groups.into_iter().collect(),
            columns: columns.into_iter().collect(),
        }
    }

    /// Encode the group choice for the echo field. Group names never
    /// contain a TAB, which makes it a safe separator.
    pub fn encode_groups(&self) -> String {
        self.column_groups
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join("\t")
    }

    /// Encode the index choice for the echo field.
    pub fn encode_columns(&self) -> String {
        self.columns
            .iter()
            .map(|index| index.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Decode an echoed selection. Index parsing fails the same way as
    /// [`parse_column_indices`].
    pub fn decode(groups: &str, columns: &str) -> Result<Self> {
        let column_groups = groups
            .split('\t')
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();
        let columns = columns
            .split_whitespace()
            .map(|value| {
                value
                    .parse::<usize>()
                    .map_err(|_| TreetabError::InvalidColumnIndex {
                        value: value.to_string(),
                    })
            })
            .collect::<Result<BTreeSet<usize>>>()?;
        Ok(Self {
            column_groups,
            columns,
        })
    }

    /// Whether the group choice differs from the echoed previous one. A
    /// structural change; the caller must re-offer the column listing
    /// instead of exporting with stale indices.
    pub fn structural_change(&self, previous: &ColumnSelection) -> bool {
        self.column_groups != previous.column_groups
    }
}

/// The narrowed column listing for the second round-trip: per selected
/// group, its global column indices in ascending order. Groups keep their
/// structural order from the schema.
pub fn columns_for_groups(
    schema: &Schema,
    selected_groups: &BTreeSet<String>,
) -> Vec<(String, Vec<usize>)> {
    schema
        .column_groups
        .iter()
        .filter(|group| selected_groups.contains(&group.name))
        .map(|group| (group.name.clone(), group.sorted_indices()))
        .collect()
}

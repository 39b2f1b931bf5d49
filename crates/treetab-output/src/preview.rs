//! Terminal preview rendering of the export table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement};

use crate::table::Table;

/// Render the export table as a bordered text table, header row bold.
///
/// This is what the user inspects before committing to a download; the CSV
/// bytes come from [`crate::csv`] instead.
pub fn render_preview(table: &Table) -> comfy_table::Table {
    let mut preview = comfy_table::Table::new();
    preview
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((header, data_rows)) = table.rows.split_first() {
        preview.set_header(
            header
                .iter()
                .map(|heading| Cell::new(heading).add_attribute(Attribute::Bold)),
        );
        for row in data_rows {
            preview.add_row(row.iter().map(Cell::new));
        }
    }
    preview
}

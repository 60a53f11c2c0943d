//! Pipe table rows.

use smallvec::SmallVec;

use crate::inline::format_inline;
use crate::render::HtmlWriter;

/// Cells of one table row, trimmed, with the outer pipes removed.
///
/// # Example
/// ```
/// use ferrobook::block::split_cells;
///
/// assert_eq!(split_cells("| a | b |").as_slice(), ["a", "b"]);
/// ```
pub fn split_cells(row: &str) -> SmallVec<[&str; 8]> {
    row.trim()
        .trim_matches('|')
        .split('|')
        .map(str::trim)
        .collect()
}

/// Write one row, inline-formatting each cell.
pub fn write_row(writer: &mut HtmlWriter, row: &str, cell_tag: &'static str) {
    let cells: SmallVec<[String; 8]> = split_cells(row).into_iter().map(format_inline).collect();
    writer.table_row(cell_tag, cells.iter().map(String::as_str));
}

//! Scrape instruction names and encodings out of a rendered instruction-set
//! specification page.
//!
//! The page is read through the [`TableSource`] / [`TableRow`] traits so the
//! matching logic does not depend on how the document was obtained.
//! [`HtmlTable`] implements them for a saved HTML page.

pub mod error;
pub mod html;
pub mod markup;
pub mod source;

pub use error::ExtractError;
pub use html::HtmlTable;
pub use markup::{encoding_bytes, name_segments};
pub use source::{TableRow, TableSource};

use opcodes_table::{Instruction, OpcodeTable};

/// Index of the cell holding the binary encoding.
pub const ENCODING_CELL: usize = 1;

/// Extract one instruction from a table row.
///
/// Returns `None` for rows without the nested first-cell text (headers,
/// layout rows) and for rows whose first cell names nothing.
pub fn extract_row<R: TableRow + ?Sized>(row: &R) -> Option<Instruction> {
    let name_text = row.first_cell_text()?;
    let segments = name_segments(&name_text);

    let bytes = match row.cell_text(ENCODING_CELL) {
        Some(text) => encoding_bytes(&text),
        None => {
            log::debug!("no encoding cell for {segments:?}");
            Vec::new()
        }
    };

    let insn = Instruction::from_segments(&segments, bytes);
    if insn.is_none() {
        log::debug!("skipping row without a mnemonic: {name_text:?}");
    }
    insn
}

/// Extract every instruction in `source`, in row order.
pub fn extract<S: TableSource + ?Sized>(source: &S) -> OpcodeTable {
    let mut rows = 0usize;
    let table: OpcodeTable = source
        .rows()
        .inspect(|_| rows += 1)
        .filter_map(|row| extract_row(&row))
        .collect();
    log::info!("extracted {} instructions from {rows} rows", table.len());
    table
}

/// One row of a structured table.
pub trait TableRow {
    /// Text at the end of the row's first-child chain three levels deep
    /// (row, cell, wrapper, text element).
    ///
    /// Every link is the literal first child node, text and comments
    /// included. `None` when the chain is broken or does not end on an
    /// element.
    fn first_cell_text(&self) -> Option<String>;

    /// Text at the end of the `index`-th cell's first-child chain two levels
    /// deep. Cells are counted by element, ignoring text between them.
    fn cell_text(&self, index: usize) -> Option<String>;
}

/// A document that can be read as a sequence of table rows.
pub trait TableSource {
    type Row<'a>: TableRow
    where
        Self: 'a;

    /// Every row, in document order.
    fn rows(&self) -> impl Iterator<Item = Self::Row<'_>>;
}

use std::io::Read;
use std::path::Path;

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};

use crate::{ExtractError, TableRow, TableSource};

/// A parsed HTML page, read as the `<tr>` rows it contains.
pub struct HtmlTable {
    document: Html,
}

impl HtmlTable {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Read and parse an HTML file. `-` reads standard input.
    pub fn open(path: &Path) -> Result<Self, ExtractError> {
        let html = if path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| ExtractError::Io(format!("<stdin>: {e}")))?;
            buf
        } else {
            std::fs::read_to_string(path)
                .map_err(|e| ExtractError::Io(format!("{}: {e}", path.display())))?
        };
        Ok(Self::parse(&html))
    }
}

impl TableSource for HtmlTable {
    type Row<'a> = HtmlRow<'a>;

    fn rows(&self) -> impl Iterator<Item = Self::Row<'_>> {
        self.document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "tr")
            .map(|row| HtmlRow { row })
    }
}

/// A `<tr>` element.
#[derive(Clone, Copy)]
pub struct HtmlRow<'a> {
    row: ElementRef<'a>,
}

impl TableRow for HtmlRow<'_> {
    fn first_cell_text(&self) -> Option<String> {
        nested_text(*self.row, 3)
    }

    fn cell_text(&self, index: usize) -> Option<String> {
        let cell = self.row.child_elements().nth(index)?;
        nested_text(*cell, 2)
    }
}

/// Follow `depth` first-child links from `node` and return the text of the
/// element found there.
fn nested_text(mut node: NodeRef<'_, Node>, depth: usize) -> Option<String> {
    for _ in 0..depth {
        node = node.first_child()?;
    }
    ElementRef::wrap(node).map(|el| el.text().collect())
}

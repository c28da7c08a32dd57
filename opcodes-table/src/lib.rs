//! Instruction encoding tables.
//!
//! An [`OpcodeTable`] is the intermediate artifact between scraping a
//! rendered instruction-set page and generating constant declarations from
//! it. On disk it is a JSON array of `[name, bytes]` pairs:
//!
//! ```
//! use opcodes_table::OpcodeTable;
//!
//! let table = OpcodeTable::from_json(r#"[["i32.load", ["28"]], ["v128.load", ["FD", "00"]]]"#)?;
//! assert_eq!(table.len(), 2);
//! assert_eq!(table[1].identifier(), "V128_LOAD");
//! # Ok::<(), opcodes_table::Error>(())
//! ```

pub mod error;
pub mod hex;
pub mod instruction;

pub use error::{Error, Result};
pub use hex::HexByte;
pub use instruction::{Instruction, derive_identifier, render_name};

use std::ops::Deref;
use std::path::Path;

/// An ordered list of instructions, in the order they were found.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct OpcodeTable(Vec<Instruction>);

impl OpcodeTable {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self(instructions)
    }

    /// Parse a table from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Json(e.to_string()))
    }

    /// Read and parse a table from a JSON file.
    pub fn open(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Serialize to a single line of JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.0).map_err(|e| Error::Json(e.to_string()))
    }

    pub fn into_inner(self) -> Vec<Instruction> {
        self.0
    }
}

impl Deref for OpcodeTable {
    type Target = [Instruction];

    fn deref(&self) -> &[Instruction] {
        &self.0
    }
}

impl From<Vec<Instruction>> for OpcodeTable {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self(instructions)
    }
}

impl FromIterator<Instruction> for OpcodeTable {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a OpcodeTable {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

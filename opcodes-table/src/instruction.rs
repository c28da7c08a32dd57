use serde::{Deserialize, Serialize};

use crate::HexByte;

/// An instruction mnemonic paired with its binary encoding.
///
/// Serialized as a two-element array: `["v128.load", ["FD", "00"]]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, Vec<HexByte>)", into = "(String, Vec<HexByte>)")]
pub struct Instruction {
    pub name: String,
    pub bytes: Vec<HexByte>,
}

impl Instruction {
    pub fn new(name: impl Into<String>, bytes: Vec<HexByte>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Build an instruction from the name segments found in a table row.
    ///
    /// Returns `None` when there are no segments to render a name from.
    pub fn from_segments<S: AsRef<str>>(segments: &[S], bytes: Vec<HexByte>) -> Option<Self> {
        render_name(segments).map(|name| Self { name, bytes })
    }

    /// Constant identifier for this instruction, e.g. `I32_LOAD`.
    pub fn identifier(&self) -> String {
        derive_identifier(&self.name)
    }
}

impl From<(String, Vec<HexByte>)> for Instruction {
    fn from((name, bytes): (String, Vec<HexByte>)) -> Self {
        Self { name, bytes }
    }
}

impl From<Instruction> for (String, Vec<HexByte>) {
    fn from(insn: Instruction) -> Self {
        (insn.name, insn.bytes)
    }
}

/// Join name segments into a mnemonic.
///
/// The first segment is the value type or namespace; everything after it is
/// concatenated behind a single `.`:
///
/// ```
/// use opcodes_table::render_name;
///
/// assert_eq!(render_name(&["nop"]).as_deref(), Some("nop"));
/// assert_eq!(render_name(&["i32", "load"]).as_deref(), Some("i32.load"));
/// assert_eq!(render_name(&["i32", "load", "8_s"]).as_deref(), Some("i32.load8_s"));
/// ```
pub fn render_name<S: AsRef<str>>(segments: &[S]) -> Option<String> {
    let (first, rest) = segments.split_first()?;
    let mut name = first.as_ref().to_string();
    if !rest.is_empty() {
        name.push('.');
        for segment in rest {
            name.push_str(segment.as_ref());
        }
    }
    Some(name)
}

/// Uppercase a mnemonic and replace every `.` with `_`.
pub fn derive_identifier(name: &str) -> String {
    name.to_uppercase().replace('.', "_")
}

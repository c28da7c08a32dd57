use std::fmt;

use opcodes_table::{HexByte, Instruction};

use crate::GenerateError;

/// The value bound by a generated constant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstValue {
    /// A single-byte encoding, declared as `u8`.
    Byte(HexByte),
    /// A multi-byte encoding, declared as `[u8; N]`.
    Bytes(Vec<HexByte>),
}

/// A `pub const` declaration for one instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constant {
    pub identifier: String,
    pub value: ConstValue,
}

impl Constant {
    pub fn from_instruction(insn: &Instruction) -> Result<Self, GenerateError> {
        let value = match insn.bytes.as_slice() {
            [] => {
                return Err(GenerateError::EmptyEncoding {
                    name: insn.name.clone(),
                });
            }
            [byte] => ConstValue::Byte(*byte),
            bytes => ConstValue::Bytes(bytes.to_vec()),
        };
        Ok(Self {
            identifier: insn.identifier(),
            value,
        })
    }

    /// Declared type: `u8` or `[u8; N]`.
    pub fn type_name(&self) -> String {
        match &self.value {
            ConstValue::Byte(_) => "u8".to_string(),
            ConstValue::Bytes(bytes) => format!("[u8; {}]", bytes.len()),
        }
    }

    /// Literal expression: `0x28` or `[0xFD, 0x00]`.
    pub fn literal(&self) -> String {
        match &self.value {
            ConstValue::Byte(byte) => format!("0x{byte}"),
            ConstValue::Bytes(bytes) => {
                let elems: Vec<String> = bytes.iter().map(|b| format!("0x{b}")).collect();
                format!("[{}]", elems.join(", "))
            }
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pub const {}: {} = {};",
            self.identifier,
            self.type_name(),
            self.literal()
        )
    }
}

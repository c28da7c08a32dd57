//! Rust constant declarations for an instruction encoding table.
//!
//! Each instruction becomes a doc comment and a `pub const` whose type
//! follows the length of its encoding:
//!
//! ```
//! use opcodes_gen::emit_constants;
//! use opcodes_table::OpcodeTable;
//!
//! let table = OpcodeTable::from_json(r#"[["v128.load", ["FD", "00"]]]"#)?;
//! assert_eq!(
//!     emit_constants(&table)?,
//!     "/// v128.load = 0xFD 0x00\npub const V128_LOAD: [u8; 2] = [0xFD, 0x00];\n\n"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod constant;
pub mod emitter;

pub use constant::{ConstValue, Constant};
pub use emitter::{emit_constant, emit_constants};

/// Errors from [`emit_constants`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The instruction has no encoding bytes, so there is no value to bind.
    #[error("instruction `{name}` has an empty encoding")]
    EmptyEncoding { name: String },
}

use std::collections::HashSet;
use std::fmt::Write;

use opcodes_table::{Instruction, OpcodeTable};

use crate::{Constant, GenerateError};

/// Emit every instruction in `table` as a documented constant, in table
/// order. Each block is followed by a blank line.
///
/// Fails on the first instruction with an empty encoding; nothing is
/// returned in that case.
pub fn emit_constants(table: &OpcodeTable) -> Result<String, GenerateError> {
    let mut out = String::new();
    let mut seen = HashSet::new();

    for insn in table {
        let constant = emit_constant(&mut out, insn)?;
        if !seen.insert(constant.identifier.clone()) {
            log::warn!("duplicate constant {} (from `{}`)", constant.identifier, insn.name);
        }
    }

    log::info!("emitted {} constants", table.len());
    Ok(out)
}

/// Append the doc comment, declaration and trailing blank line for `insn`.
pub fn emit_constant(out: &mut String, insn: &Instruction) -> Result<Constant, GenerateError> {
    let constant = Constant::from_instruction(insn)?;

    let bytes: Vec<String> = insn.bytes.iter().map(|b| format!("0x{b}")).collect();
    let _ = writeln!(out, "/// {} = {}", insn.name, bytes.join(" "));
    let _ = writeln!(out, "{constant}");
    out.push('\n');

    Ok(constant)
}

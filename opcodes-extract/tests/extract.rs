mod common;

use common::{page, row};
use opcodes_extract::*;
use opcodes_table::{HexByte, Instruction};

#[test]
fn extracts_rows_in_order() {
    let html = page(&[
        row(r"\mathsf{i32}.\mathsf{load}~m", r"\mathdef1{28}~~m{:}\mathtt{memarg}"),
        row(r"\mathsf{i32}.\mathsf{const}~i", r"\mathdef1{41}~~i{:}\mathtt{i32}"),
        row(r"\mathsf{nop}", r"\mathdef1{01}"),
    ]);

    let table = extract(&HtmlTable::parse(&html));
    assert_eq!(
        table.into_inner(),
        vec![
            Instruction::new("i32.load", vec![HexByte(0x28)]),
            Instruction::new("i32.const", vec![HexByte(0x41)]),
            Instruction::new("nop", vec![HexByte(0x01)]),
        ]
    );
}

#[test]
fn multi_byte_encoding() {
    let html = page(&[row(
        r"\mathsf{v128}.\mathsf{load}~m",
        r"\mathdef2{FD}~~0{:}\mathtt{u32}~~m{:}\mathtt{memarg}",
    )]);

    let table = extract(&HtmlTable::parse(&html));
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].name, "v128.load");
    assert_eq!(table[0].bytes, [HexByte(0xFD)]);
}

#[test]
fn joined_segments_and_escapes() {
    let html = page(&[row(
        r"\mathsf{i64}.\mathsf{load}\mathsf{32\_u}~m",
        r"\mathdef7{35}",
    )]);

    let table = extract(&HtmlTable::parse(&html));
    assert_eq!(table[0].name, "i64.load32_u");
    assert_eq!(table[0].identifier(), "I64_LOAD32_U");
}

#[test]
fn rows_without_nested_text_are_dropped() {
    let html = page(&[
        "<tr><th>Instruction</th><th>Binary Opcode</th></tr>".to_string(),
        row(r"\mathsf{unreachable}", r"\mathdef1{00}"),
        "<tr><td>plain</td><td>cell</td></tr>".to_string(),
        "<tr></tr>".to_string(),
        row(r"\mathsf{drop}", r"\mathdef1{1A}"),
    ]);

    let table = extract(&HtmlTable::parse(&html));
    let names: Vec<_> = table.iter().map(|insn| insn.name.as_str()).collect();
    assert_eq!(names, ["unreachable", "drop"]);
}

#[test]
fn whitespace_or_comment_first_child_excludes_row() {
    let html = page(&[
        "<tr><td>\n  <p><span>\\(\\mathsf{nop}\\)</span></p></td>\
         <td><p><span>\\(\\mathdef1{01}\\)</span></p></td></tr>"
            .to_string(),
        "<tr><td><!-- c --><p><span>\\(\\mathsf{drop}\\)</span></p></td>\
         <td><p><span>\\(\\mathdef1{1A}\\)</span></p></td></tr>"
            .to_string(),
        row(r"\mathsf{select}", r"\mathdef1{1B}"),
    ]);

    let table = extract(&HtmlTable::parse(&html));
    assert_eq!(table.into_inner(), vec![Instruction::new("select", vec![HexByte(0x1B)])]);
}

#[test]
fn row_without_bytes_keeps_empty_encoding() {
    let html = page(&[row(r"\mathsf{select}~t^\ast", r"\mathit{reserved}")]);

    let table = extract(&HtmlTable::parse(&html));
    assert_eq!(table.len(), 1);
    assert!(table[0].bytes.is_empty());
}

#[test]
fn row_without_encoding_cell() {
    let html = page(&["<tr><td><p><span>\\(\\mathsf{end}\\)</span></p></td></tr>".to_string()]);

    let table = extract(&HtmlTable::parse(&html));
    assert_eq!(table.into_inner(), vec![Instruction::new("end", Vec::new())]);
}

#[test]
fn row_without_mnemonic_is_skipped() {
    let html = page(&[row(r"\mathit{instr}", r"\mathdef1{FF}")]);
    assert!(extract(&HtmlTable::parse(&html)).is_empty());
}

#[test]
fn output_is_one_line_of_json() {
    let html = page(&[
        row(r"\mathsf{i32}.\mathsf{load}", r"\mathdef1{28}"),
        row(r"\mathsf{v128}.\mathsf{load}", r"\mathdef2{FD}~\mathdef2{00}"),
    ]);

    let json = extract(&HtmlTable::parse(&html)).to_json().unwrap();
    assert_eq!(json, r#"[["i32.load",["28"]],["v128.load",["FD","00"]]]"#);
    assert!(!json.contains('\n'));
}

struct MemoryRow {
    first: Option<&'static str>,
    cells: Vec<&'static str>,
}

impl TableRow for MemoryRow {
    fn first_cell_text(&self) -> Option<String> {
        self.first.map(str::to_string)
    }

    fn cell_text(&self, index: usize) -> Option<String> {
        self.cells.get(index).map(|s| s.to_string())
    }
}

struct MemoryTable(Vec<MemoryRow>);

impl TableSource for MemoryTable {
    type Row<'a> = &'a MemoryRow;

    fn rows(&self) -> impl Iterator<Item = Self::Row<'_>> {
        self.0.iter()
    }
}

impl TableRow for &MemoryRow {
    fn first_cell_text(&self) -> Option<String> {
        (**self).first_cell_text()
    }

    fn cell_text(&self, index: usize) -> Option<String> {
        (**self).cell_text(index)
    }
}

#[test]
fn any_table_source() {
    let source = MemoryTable(vec![
        MemoryRow {
            first: Some(r"\mathsf{ref}.\mathsf{null}"),
            cells: vec!["", r"\mathdef3{D0}"],
        },
        MemoryRow {
            first: None,
            cells: vec!["", r"\mathdef3{D1}"],
        },
        MemoryRow {
            first: Some(r"\mathsf{ref}.\mathsf{is\_null}"),
            cells: vec!["", r"\mathdef3{D1}"],
        },
    ]);

    let table = extract(&source);
    assert_eq!(
        table.into_inner(),
        vec![
            Instruction::new("ref.null", vec![HexByte(0xD0)]),
            Instruction::new("ref.is_null", vec![HexByte(0xD1)]),
        ]
    );
}

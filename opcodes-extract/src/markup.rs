//! Token matching over the TeX source embedded in rendered math.

use std::sync::LazyLock;

use opcodes_table::HexByte;
use regex::Regex;

// `content` may hold one level of balanced braces, e.g. `\mathsf{i32.\{x\}}`.
static NAME_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\mathsf\{((?:[^{]|\{.+?\})+?)\}").expect("name segment pattern")
});

static ENCODING_BYTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\mathdef[0-9]+\{([0-9A-F]{2})\}").expect("encoding byte pattern")
});

/// Every `\mathsf{...}` fragment in `text`, with `\_` unescaped and braces
/// dropped.
pub fn name_segments(text: &str) -> Vec<String> {
    NAME_SEGMENT
        .captures_iter(text)
        .map(|caps| caps[1].replace(r"\_", "_").replace(['{', '}'], ""))
        .collect()
}

/// Every `\mathdefN{HH}` byte in `text`, in order.
pub fn encoding_bytes(text: &str) -> Vec<HexByte> {
    ENCODING_BYTE
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}

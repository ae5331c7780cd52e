use regex::Regex;
use std::sync::LazyLock;

// A block boundary is "recipe:" (one optional whitespace before the
// colon) or a run of three-or-more '=' or '-' characters, in either
// case sitting at the start of a line.
static BLOCK_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:^|\n)(?:recipe\s?:|===+|---+)").expect("valid regex"));

/// Split a raw text blob into candidate recipe blocks.
///
/// Delimiter text is consumed, and input without any delimiter comes
/// back as a single block. Empty segments (ahead of a leading
/// delimiter, between adjacent delimiters) are legal output here; the
/// assembler filters them by length.
pub fn split_blocks(text: &str) -> Vec<&str> {
    BLOCK_DELIMITER.split(text).collect()
}

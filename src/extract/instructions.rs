// Headers that open instruction capture, and the section markers that
// close it for good.
const HEADERS: [&str; 3] = ["instructions", "directions", "method"];
const TERMINATORS: [&str; 5] = ["macros", "nutrition", "course", "calories", "psst"];

/// Collect the instruction lines of a block, in order.
///
/// Capture starts after the first line mentioning an instruction header
/// (the header line itself is not emitted) and stops permanently at the
/// first line mentioning a terminator; the rest of the block is never
/// scanned. While capturing, a line is emitted only if it is non-empty,
/// does not open with "tag us", and has more than two words. Lines
/// failing those filters are skipped without ending the capture. A
/// block with no header yields an empty sequence.
pub fn extract(block: &str) -> Vec<String> {
    let mut steps = Vec::new();
    let mut capturing = false;

    for line in block.lines() {
        let line = line.trim();
        let lower = line.to_lowercase();

        if !capturing {
            if HEADERS.iter().any(|header| lower.contains(header)) {
                capturing = true;
            }
            continue;
        }

        if TERMINATORS.iter().any(|marker| lower.contains(marker)) {
            break;
        }

        if !line.is_empty() && !lower.starts_with("tag us") && line.split_whitespace().count() > 2 {
            steps.push(line.to_string());
        }
    }

    steps
}

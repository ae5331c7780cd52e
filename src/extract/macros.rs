use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

// A nutrient name, a run of anything that is not a digit, then the
// value (digits with an optional decimal point).
static MACRO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(calories|protein|fat|carbs|carbohydrates|fiber|sugar|cholesterol|sodium)[^\d]*(\d+\.?\d*)",
    )
    .expect("valid regex")
});

/// Scan a whole block for nutrient name/value pairs.
///
/// The scan is not limited to a "macros" section: a value anywhere in
/// the block is captured, including inside an ingredient line. Names
/// are lowercased, and a name that recurs keeps its last value.
pub fn extract(block: &str) -> HashMap<String, f64> {
    let mut macros = HashMap::new();

    for caps in MACRO.captures_iter(block) {
        let name = caps[1].to_lowercase();
        if let Ok(value) = caps[2].parse::<f64>() {
            macros.insert(name, value);
        }
    }

    macros
}

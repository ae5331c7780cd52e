use regex::Regex;
use std::sync::LazyLock;

// Rule (a): optional bullet, a quantity (integer or decimal), then a
// unit word from the fixed vocabulary at a word boundary.
static MEASURED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[-*•]?\s*\d+(\.\d+)?\s?(cup|tsp|tbsp|g|gram|oz|ml|kg|lb|teaspoon|tablespoon|clove|slice|scoop|packet|can|stick)\b",
    )
    .expect("valid regex")
});

// Rule (b): optional bullet, then a quantity followed by whitespace and
// anything at all.
static LEADING_QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•]?\s*\d+\s.*").expect("valid regex"));

// Substring vocabulary for rule (b). Plain containment, no word
// boundary: looser than rule (a), so a quantity line mentioning "cup"
// or "g" anywhere passes.
const LOOSE_UNITS: [&str; 8] = ["cup", "tsp", "tbsp", "oz", "g", "ml", "kg", "lb"];

/// Collect the lines of a block that read like ingredient entries,
/// preserving their original order. A line qualifies through the strict
/// quantity-plus-unit rule or the loose quantity-plus-mention rule;
/// everything else, blank lines included, is dropped.
pub fn extract(block: &str) -> Vec<String> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| measured_quantity(line) || loose_quantity(line))
        .map(str::to_string)
        .collect()
}

/// Rule (a): the line starts with a quantity and a whole unit word.
fn measured_quantity(line: &str) -> bool {
    MEASURED.is_match(line)
}

/// Rule (b): the line starts with a quantity and mentions a unit
/// somewhere.
fn loose_quantity(line: &str) -> bool {
    if !LEADING_QUANTITY.is_match(line) {
        return false;
    }
    let lower = line.to_lowercase();
    LOOSE_UNITS.iter().any(|unit| lower.contains(unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_with_unit_word_qualifies() {
        assert_eq!(extract("2 cups flour"), vec!["2 cups flour"]);
        assert_eq!(extract("0.5 cup milk"), vec!["0.5 cup milk"]);
    }

    #[test]
    fn bullets_are_tolerated() {
        let block = "- 1 tsp vanilla extract\n* 2 tbsp cocoa powder\n• 1 scoop whey";
        assert_eq!(
            extract(block),
            vec![
                "- 1 tsp vanilla extract",
                "* 2 tbsp cocoa powder",
                "• 1 scoop whey"
            ]
        );
    }

    #[test]
    fn unit_word_requires_a_boundary() {
        // "stick" reads as a unit only when the word ends there
        assert!(measured_quantity("1 stick butter"));
        assert!(!measured_quantity("2 stickers for the jar"));
        // plural "cups" fails the strict rule ("cup" runs into "s")
        // and is caught by the loose rule instead
        assert!(!measured_quantity("2 cups flour"));
        assert!(!measured_quantity("2 cupcakes"));
    }

    #[test]
    fn quantity_with_unit_mention_qualifies() {
        // no unit word at the front, but "tbsp" appears in the line
        assert_eq!(
            extract("3 large eggs with 1 tbsp water"),
            vec!["3 large eggs with 1 tbsp water"]
        );
    }

    #[test]
    fn lines_without_quantity_or_unit_are_dropped() {
        let block = "Mix everything well\n2 stickers for the jar\n\nfresh basil to taste";
        assert!(extract(block).is_empty());
    }

    #[test]
    fn order_is_preserved_and_nothing_is_deduplicated() {
        let block = "1 cup sugar\nstir well\n1 cup sugar";
        assert_eq!(extract(block), vec!["1 cup sugar", "1 cup sugar"]);
    }
}

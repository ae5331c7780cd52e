use regex::Regex;
use std::sync::LazyLock;

/// Title used when a block offers no usable leading text.
pub const DEFAULT_TITLE: &str = "Untitled Recipe";

// An optional "recipe:" / "recipe-" label, then the first run of
// letters, spaces and commas. Anything else ends the title.
static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(recipe\s*[:\-])?\s*([A-Za-z ,]+)").expect("valid regex"));

/// Derive a display title from the leading region of a block.
///
/// Falls back to [`DEFAULT_TITLE`] when no letter run exists (a block
/// starting with bare numbers, say) or the matched run trims to
/// nothing. Never fails.
pub fn extract(block: &str) -> String {
    let title = TITLE
        .captures(block.trim())
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().trim())
        .unwrap_or_default();

    if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_leading_letter_run() {
        assert_eq!(extract("Banana Bread\n2 cups flour"), "Banana Bread");
    }

    #[test]
    fn keeps_commas_in_title() {
        assert_eq!(
            extract("Chicken, Leek and Potato Soup\nmore text"),
            "Chicken, Leek and Potato Soup"
        );
    }

    #[test]
    fn strips_recipe_label() {
        assert_eq!(extract("Recipe - Chicken Soup\nstock"), "Chicken Soup");
        assert_eq!(extract("recipe: Lentil Curry"), "Lentil Curry");
    }

    #[test]
    fn digits_only_lead_defaults() {
        assert_eq!(extract("123 456\n789"), DEFAULT_TITLE);
    }

    #[test]
    fn empty_block_defaults() {
        assert_eq!(extract(""), DEFAULT_TITLE);
        assert_eq!(extract("   \n  "), DEFAULT_TITLE);
    }
}

//! Plain-text rendering of stored recipes.
//!
//! Reads already-extracted records back from the store; nothing here
//! touches the extraction pipeline.

use crate::store::{RecipeStore, StoreError};

/// Render every stored recipe: title heading, bulleted ingredients,
/// numbered steps, then macros when present.
pub fn render_all(store: &dyn RecipeStore) -> Result<String, StoreError> {
    let mut out = String::new();

    for summary in store.list_recipes()? {
        out.push_str(&format!("#{} {}\n", summary.id, summary.title));

        let ingredients = store.get_ingredients(summary.id)?;
        if !ingredients.is_empty() {
            out.push_str("  Ingredients:\n");
            for ingredient in &ingredients {
                out.push_str(&format!("    - {ingredient}\n"));
            }
        }

        let steps = store.get_instructions(summary.id)?;
        if !steps.is_empty() {
            out.push_str("  Instructions:\n");
            for step in &steps {
                out.push_str(&format!("    {}. {}\n", step.number, step.text));
            }
        }

        let macros = store.get_macros(summary.id)?;
        if !macros.is_empty() {
            out.push_str("  Macros:\n");
            for (name, value) in &macros {
                out.push_str(&format!("    {}: {value}\n", title_case(name)));
            }
        }

        out.push('\n');
    }

    Ok(out)
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;

    #[test]
    fn renders_every_section() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let id = store.create_recipe("Porridge").unwrap();
        store.add_ingredient(id, "1 cup oats").unwrap();
        store.add_instruction(id, 1, "Simmer the oats in milk.").unwrap();
        store.add_macro(id, "calories", 310.0).unwrap();

        let text = render_all(&store).unwrap();
        assert!(text.contains("Porridge"));
        assert!(text.contains("    - 1 cup oats"));
        assert!(text.contains("    1. Simmer the oats in milk."));
        assert!(text.contains("    Calories: 310"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let id = store.create_recipe("Bare").unwrap();
        store.add_ingredient(id, "1 cup water").unwrap();

        let text = render_all(&store).unwrap();
        assert!(text.contains("Ingredients:"));
        assert!(!text.contains("Instructions:"));
        assert!(!text.contains("Macros:"));
    }
}

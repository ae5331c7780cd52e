use log::{debug, error};

use crate::extract::{ingredients, instructions, macros, title};
use crate::model::{InstructionStep, Recipe, RecipeId};
use crate::segment::split_blocks;
use crate::store::{RecipeStore, StoreError};

/// Blocks shorter than this after trimming are noise, not recipes.
const MIN_BLOCK_CHARS: usize = 20;

/// Outcome of one ingestion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Recipes delivered to the record store
    pub stored: usize,
    /// Blocks dropped by the length filter or the storability rule
    pub skipped_blocks: usize,
    /// Recipes that failed to persist (processing continued)
    pub store_failures: usize,
}

/// Extract every recipe in `text` and persist the storable ones, in
/// block appearance order.
///
/// A store failure on one recipe is logged and counted; later blocks
/// still process. Malformed blocks are never an error, they just fail
/// the storability rule and are skipped.
pub fn ingest_text(text: &str, store: &mut dyn RecipeStore) -> IngestReport {
    let mut report = IngestReport::default();

    for block in split_blocks(text) {
        if block.trim().chars().count() < MIN_BLOCK_CHARS {
            report.skipped_blocks += 1;
            continue;
        }

        let recipe = assemble(block);
        if !recipe.is_storable() {
            debug!("Dropping block with no ingredients or instructions");
            report.skipped_blocks += 1;
            continue;
        }

        match persist(&recipe, store) {
            Ok(id) => {
                debug!("Stored recipe {:?} as #{id}", recipe.title);
                report.stored += 1;
            }
            Err(err) => {
                error!("Failed to store recipe {:?}: {err}", recipe.title);
                report.store_failures += 1;
            }
        }
    }

    report
}

/// Run the four extractors over one block. Each sees the same block
/// text and nothing else.
fn assemble(block: &str) -> Recipe {
    let instructions = instructions::extract(block)
        .into_iter()
        .zip(1u32..)
        .map(|(text, number)| InstructionStep { number, text })
        .collect();

    Recipe {
        title: title::extract(block),
        ingredients: ingredients::extract(block),
        instructions,
        macros: macros::extract(block),
    }
}

/// Write one recipe's records: the recipe row, then ingredients,
/// instructions and macros. Not atomic; a failure part-way leaves the
/// earlier rows in place.
fn persist(recipe: &Recipe, store: &mut dyn RecipeStore) -> Result<RecipeId, StoreError> {
    let recipe_id = store.create_recipe(&recipe.title)?;

    for ingredient in &recipe.ingredients {
        store.add_ingredient(recipe_id, ingredient)?;
    }
    for step in &recipe.instructions {
        store.add_instruction(recipe_id, step.number, &step.text)?;
    }
    for (name, value) in &recipe.macros {
        store.add_macro(recipe_id, name, *value)?;
    }

    Ok(recipe_id)
}

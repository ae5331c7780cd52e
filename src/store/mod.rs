use thiserror::Error;

use crate::model::{InstructionStep, RecipeId, RecipeSummary};

mod sqlite;

pub use self::sqlite::SqliteStore;

/// Errors surfaced by a record store implementation
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The store backend could not be reached or refused the operation
    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence boundary for finished recipes.
///
/// Writes for one recipe arrive as a `create_recipe` followed by its
/// parts, in order. Implementations are not required to make the group
/// atomic; a failure part-way may leave earlier rows behind.
pub trait RecipeStore {
    fn create_recipe(&mut self, title: &str) -> Result<RecipeId, StoreError>;

    fn add_ingredient(&mut self, recipe_id: RecipeId, ingredient: &str) -> Result<(), StoreError>;

    fn add_instruction(
        &mut self,
        recipe_id: RecipeId,
        step_number: u32,
        instruction: &str,
    ) -> Result<(), StoreError>;

    fn add_macro(&mut self, recipe_id: RecipeId, name: &str, value: f64) -> Result<(), StoreError>;

    fn list_recipes(&self) -> Result<Vec<RecipeSummary>, StoreError>;

    fn get_ingredients(&self, recipe_id: RecipeId) -> Result<Vec<String>, StoreError>;

    fn get_instructions(&self, recipe_id: RecipeId) -> Result<Vec<InstructionStep>, StoreError>;

    fn get_macros(&self, recipe_id: RecipeId) -> Result<Vec<(String, f64)>, StoreError>;
}

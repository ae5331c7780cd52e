use serde::Serialize;
use std::collections::HashMap;

/// Identifier assigned by the record store when a recipe is persisted.
pub type RecipeId = i64;

/// One numbered instruction line. Numbers run 1..N in detection order
/// within a recipe and carry no meaning beyond sequence position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructionStep {
    pub number: u32,
    pub text: String,
}

/// A recipe assembled from one block of source text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<InstructionStep>,
    pub macros: HashMap<String, f64>,
}

impl Recipe {
    /// A recipe is stored only when it has at least one ingredient or
    /// instruction step. Macro values alone do not qualify.
    pub fn is_storable(&self) -> bool {
        !self.ingredients.is_empty() || !self.instructions.is_empty()
    }
}

/// Row returned by [`crate::store::RecipeStore::list_recipes`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub title: String,
}

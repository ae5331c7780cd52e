//! Heuristic recipe ingestion.
//!
//! Takes loosely structured recipe text - pasted, uploaded as a file,
//! or fetched from a web page - splits it into candidate recipe blocks,
//! extracts title, ingredients, instruction steps and macro values from
//! each block, and persists the storable results to a record store.
//!
//! ```
//! use recipe_ingest::{ingest_from_text, RecipeStore, SqliteStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = SqliteStore::open_in_memory()?;
//! let report = ingest_from_text(
//!     "Pancakes\n2 cups flour\nInstructions\nMix and fry until golden.",
//!     &mut store,
//! )?;
//! assert_eq!(report.stored, 1);
//! assert_eq!(store.list_recipes()?[0].title, "Pancakes");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod ingest;
pub mod model;
pub mod segment;
pub mod source;
pub mod store;
pub mod view;

pub use builder::{RecipeIngester, RecipeIngesterBuilder};
pub use config::AppConfig;
pub use error::IngestError;
pub use ingest::{ingest_text, IngestReport};
pub use model::{InstructionStep, Recipe, RecipeId, RecipeSummary};
pub use source::InputSource;
pub use store::{RecipeStore, SqliteStore, StoreError};

/// Fetch a web page and ingest every recipe found in its text.
pub async fn ingest_from_url(
    url: &str,
    store: &mut dyn RecipeStore,
) -> Result<IngestReport, IngestError> {
    RecipeIngester::builder().url(url).run(store).await
}

/// Ingest every recipe in a pasted text blob.
pub fn ingest_from_text(
    text: &str,
    store: &mut dyn RecipeStore,
) -> Result<IngestReport, IngestError> {
    Ok(ingest::ingest_text(text, store))
}

/// Decode an uploaded file's bytes and ingest every recipe in it.
pub fn ingest_from_bytes(
    bytes: Vec<u8>,
    store: &mut dyn RecipeStore,
) -> Result<IngestReport, IngestError> {
    let text = String::from_utf8(bytes)?;
    Ok(ingest::ingest_text(&text, store))
}

//! Ingest a pasted recipe into an in-memory store and print it back.
//!
//! Run with: cargo run --example ingest_text

use recipe_ingest::{ingest_from_text, view, SqliteStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = "\
Recipe: Overnight Oats
- 1 cup rolled oats
- 2 tbsp chia seeds
Instructions
Stir everything together in a jar.
Chill overnight before serving.
Macros: calories 420, protein 18";

    let mut store = SqliteStore::open_in_memory()?;
    let report = ingest_from_text(text, &mut store)?;

    println!(
        "Stored {} recipe(s), skipped {} block(s)\n",
        report.stored, report.skipped_blocks
    );
    print!("{}", view::render_all(&store)?);

    Ok(())
}

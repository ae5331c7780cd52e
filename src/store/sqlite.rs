use rusqlite::{params, Connection};

use super::{RecipeStore, StoreError};
use crate::model::{InstructionStep, RecipeId, RecipeSummary};

/// SQLite-backed record store
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema
    /// exists.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Open a transient in-memory store.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS recipes (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 title TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS ingredients (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 recipe_id INTEGER NOT NULL,
                 ingredient TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS instructions (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 recipe_id INTEGER NOT NULL,
                 step_number INTEGER NOT NULL,
                 instruction TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS macros (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 recipe_id INTEGER NOT NULL,
                 name TEXT NOT NULL,
                 value REAL NOT NULL
             );",
        )?;

        Ok(Self { conn })
    }
}

impl RecipeStore for SqliteStore {
    fn create_recipe(&mut self, title: &str) -> Result<RecipeId, StoreError> {
        self.conn
            .execute("INSERT INTO recipes (title) VALUES (?1)", params![title])?;
        Ok(self.conn.last_insert_rowid())
    }

    fn add_ingredient(&mut self, recipe_id: RecipeId, ingredient: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO ingredients (recipe_id, ingredient) VALUES (?1, ?2)",
            params![recipe_id, ingredient],
        )?;
        Ok(())
    }

    fn add_instruction(
        &mut self,
        recipe_id: RecipeId,
        step_number: u32,
        instruction: &str,
    ) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO instructions (recipe_id, step_number, instruction) VALUES (?1, ?2, ?3)",
            params![recipe_id, step_number, instruction],
        )?;
        Ok(())
    }

    fn add_macro(&mut self, recipe_id: RecipeId, name: &str, value: f64) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO macros (recipe_id, name, value) VALUES (?1, ?2, ?3)",
            params![recipe_id, name, value],
        )?;
        Ok(())
    }

    fn list_recipes(&self) -> Result<Vec<RecipeSummary>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT id, title FROM recipes ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(RecipeSummary {
                id: row.get(0)?,
                title: row.get(1)?,
            })
        })?;

        let mut recipes = Vec::new();
        for row in rows {
            recipes.push(row?);
        }
        Ok(recipes)
    }

    fn get_ingredients(&self, recipe_id: RecipeId) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT ingredient FROM ingredients WHERE recipe_id = ?1 ORDER BY id")?;
        let rows = stmt.query_map(params![recipe_id], |row| row.get(0))?;

        let mut ingredients = Vec::new();
        for row in rows {
            ingredients.push(row?);
        }
        Ok(ingredients)
    }

    fn get_instructions(&self, recipe_id: RecipeId) -> Result<Vec<InstructionStep>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT step_number, instruction FROM instructions
             WHERE recipe_id = ?1 ORDER BY step_number",
        )?;
        let rows = stmt.query_map(params![recipe_id], |row| {
            Ok(InstructionStep {
                number: row.get(0)?,
                text: row.get(1)?,
            })
        })?;

        let mut steps = Vec::new();
        for row in rows {
            steps.push(row?);
        }
        Ok(steps)
    }

    fn get_macros(&self, recipe_id: RecipeId) -> Result<Vec<(String, f64)>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, value FROM macros WHERE recipe_id = ?1 ORDER BY name")?;
        let rows = stmt.query_map(params![recipe_id], |row| Ok((row.get(0)?, row.get(1)?)))?;

        let mut macros = Vec::new();
        for row in rows {
            macros.push(row?);
        }
        Ok(macros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_round_trips() {
        let mut store = SqliteStore::open_in_memory().unwrap();

        let id = store.create_recipe("Banana Bread").unwrap();
        store.add_ingredient(id, "2 cups flour").unwrap();
        store.add_ingredient(id, "3 ripe bananas").unwrap();
        store.add_instruction(id, 1, "Mash the bananas.").unwrap();
        store.add_instruction(id, 2, "Fold in the flour.").unwrap();
        store.add_macro(id, "calories", 210.0).unwrap();

        let recipes = store.list_recipes().unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Banana Bread");

        assert_eq!(
            store.get_ingredients(id).unwrap(),
            vec!["2 cups flour", "3 ripe bananas"]
        );
        assert_eq!(
            store.get_instructions(id).unwrap(),
            vec![
                InstructionStep {
                    number: 1,
                    text: "Mash the bananas.".to_string()
                },
                InstructionStep {
                    number: 2,
                    text: "Fold in the flour.".to_string()
                },
            ]
        );
        assert_eq!(store.get_macros(id).unwrap(), vec![("calories".to_string(), 210.0)]);
    }

    #[test]
    fn ids_are_distinct_and_ascending() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let first = store.create_recipe("First").unwrap();
        let second = store.create_recipe("Second").unwrap();
        assert!(second > first);
    }

    #[test]
    fn queries_on_unknown_recipe_are_empty() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.get_ingredients(42).unwrap().is_empty());
        assert!(store.get_instructions(42).unwrap().is_empty());
        assert!(store.get_macros(42).unwrap().is_empty());
    }
}

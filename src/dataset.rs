use anyhow::{Context, Result};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::LookupError;
use crate::models::Recipe;

/// The recipe table, in artifact order, with an id -> row index.
pub struct Dataset {
    recipes: Vec<Recipe>,
    rows_by_id: HashMap<i64, usize>,
}

impl Dataset {
    /// Load the dataset artifact (a JSON array of recipes).
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset {}", path.display()))?;
        let recipes: Vec<Recipe> = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse dataset {}", path.display()))?;
        Self::from_recipes(recipes)
    }

    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self> {
        anyhow::ensure!(!recipes.is_empty(), "Dataset contains no recipes");

        let mut rows_by_id = HashMap::with_capacity(recipes.len());
        for (row, recipe) in recipes.iter().enumerate() {
            if rows_by_id.insert(recipe.id, row).is_some() {
                anyhow::bail!("Duplicate recipe id {} in dataset", recipe.id);
            }
        }

        Ok(Self {
            recipes,
            rows_by_id,
        })
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipe at a row. Panics if `row` is out of range.
    pub fn get(&self, row: usize) -> &Recipe {
        &self.recipes[row]
    }

    pub fn row_of(&self, id: i64) -> Option<usize> {
        self.rows_by_id.get(&id).copied()
    }

    /// Resolve raw user input to a row.
    pub fn lookup(&self, raw: &str) -> std::result::Result<usize, LookupError> {
        let trimmed = raw.trim();
        let id: i64 = trimmed
            .parse()
            .map_err(|_| LookupError::Malformed(trimmed.to_string()))?;
        self.row_of(id).ok_or(LookupError::NotFound(id))
    }

    pub fn cuisine_count(&self) -> usize {
        self.recipes
            .iter()
            .map(|r| r.cuisine.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

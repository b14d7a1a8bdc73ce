//! The recommendation engine: shared immutable context and the four queries.

pub mod render;

use anyhow::Result;
use std::collections::HashSet;

use crate::config::Config;
use crate::dataset::Dataset;
use crate::models::{
    ComplementLookup, HealthResponse, IngredientMatch, IngredientSuggestion, RecipeLookup,
    RecipeMatch,
};
use crate::search::cooccurrence::CooccurrenceMatrix;
use crate::search::neighbors::{Neighbor, NeighborIndex};
use crate::search::vectorizer::{tokenize, IngredientVectorizer};

/// Everything a query needs, built once at startup and read-only afterwards.
pub struct RecommendationEngine {
    dataset: Dataset,
    vectorizer: IngredientVectorizer,
    neighbors: NeighborIndex,
    cooccurrence: CooccurrenceMatrix,
    example_ids: Vec<i64>,
}

impl RecommendationEngine {
    pub fn build(dataset: Dataset, config: &Config) -> Result<Self> {
        let documents: Vec<String> = dataset.recipes().iter().map(|r| r.ingredient_line()).collect();
        let (vectorizer, rows) =
            IngredientVectorizer::fit_transform(&documents, config.vectorizer.max_df)?;

        anyhow::ensure!(
            rows.len() == dataset.recipe_count(),
            "Vectorized {} rows for {} recipes",
            rows.len(),
            dataset.recipe_count()
        );

        let cooccurrence = CooccurrenceMatrix::build(&rows, vectorizer.vocabulary_size());
        let neighbors = NeighborIndex::new(rows, vectorizer.vocabulary_size());

        tracing::info!(
            "Engine ready: {} recipes, {} ingredients in vocabulary (max_df={})",
            dataset.recipe_count(),
            vectorizer.vocabulary_size(),
            config.vectorizer.max_df
        );

        Ok(Self {
            dataset,
            vectorizer,
            neighbors,
            cooccurrence,
            example_ids: config.example_ids.clone(),
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn vectorizer(&self) -> &IngredientVectorizer {
        &self.vectorizer
    }

    pub fn stats(&self) -> HealthResponse {
        HealthResponse {
            recipes: self.dataset.recipe_count(),
            vocabulary: self.vectorizer.vocabulary_size(),
            cuisines: self.dataset.cuisine_count(),
        }
    }

    /// Recipes nearest to the given recipe, excluding itself.
    pub fn similar_recipes(&self, raw_id: &str, count: usize) -> RecipeLookup {
        let row = match self.dataset.lookup(raw_id) {
            Ok(row) => row,
            Err(e) => {
                tracing::debug!("Similar-recipe lookup failed: {e}");
                return self.not_found(raw_id);
            }
        };

        let query = self.neighbors.row(row);
        let recommendations = self
            .neighbors
            .kneighbors_where(query, count, |r| r != row)
            .into_iter()
            .map(|n| self.describe(n))
            .collect::<Vec<_>>();

        tracing::debug!(
            "Similar recipes for {}: {} results",
            self.dataset.get(row).id,
            recommendations.len()
        );

        RecipeLookup::Found {
            recipe: self.describe(Neighbor { row, distance: 0.0 }),
            recommendations,
        }
    }

    /// Nearest recipes such that no two results, nor the query, share a cuisine.
    ///
    /// Stops early once every cuisine has been used.
    pub fn discover_cuisines(&self, raw_id: &str, count: usize) -> RecipeLookup {
        let row = match self.dataset.lookup(raw_id) {
            Ok(row) => row,
            Err(e) => {
                tracing::debug!("Discovery lookup failed: {e}");
                return self.not_found(raw_id);
            }
        };

        let query = self.neighbors.row(row);
        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(self.dataset.get(row).cuisine.as_str());

        let mut recommendations = Vec::with_capacity(count);
        for hit in self.neighbors.ranked(query) {
            if recommendations.len() == count {
                break;
            }
            if seen.insert(self.dataset.get(hit.row).cuisine.as_str()) {
                recommendations.push(self.describe(hit));
            }
        }
        if recommendations.len() < count {
            tracing::debug!(
                "Discovery for {} ran out of cuisines after {} results",
                self.dataset.get(row).id,
                recommendations.len()
            );
        }

        RecipeLookup::Found {
            recipe: self.describe(Neighbor { row, distance: 0.0 }),
            recommendations,
        }
    }

    /// Recipes nearest to a user's ingredient list, with what is missing for each.
    pub fn recipes_for_ingredients(&self, raw: &str, count: usize) -> Vec<IngredientMatch> {
        let query = self.vectorizer.transform(raw);
        let have: HashSet<&str> = tokenize(raw).collect();

        let matches: Vec<IngredientMatch> = self
            .neighbors
            .kneighbors(&query, count)
            .into_iter()
            .map(|n| {
                let recipe = self.describe(n);
                let missing = {
                    let mut listed = HashSet::new();
                    recipe
                        .ingredients
                        .iter()
                        .filter(|i| !have.contains(i.as_str()) && listed.insert(i.as_str()))
                        .cloned()
                        .collect()
                };
                IngredientMatch { recipe, missing }
            })
            .collect();

        tracing::debug!(
            "Ingredient match for {} recognized ingredients: {} results",
            query.nnz(),
            matches.len()
        );
        matches
    }

    /// Ingredients that most often appear alongside the recognized ones.
    pub fn complementary_ingredients(&self, raw: &str, count: usize) -> ComplementLookup {
        let mut columns = Vec::new();
        let mut recognized = Vec::new();
        let mut unrecognized: Vec<String> = Vec::new();

        for token in tokenize(raw) {
            match self.vectorizer.column(token) {
                Some(c) => {
                    if !columns.contains(&c) {
                        columns.push(c);
                        recognized.push(token.to_string());
                    }
                }
                None => {
                    if !unrecognized.iter().any(|u| u == token) {
                        unrecognized.push(token.to_string());
                    }
                }
            }
        }

        if columns.is_empty() {
            tracing::debug!("Complement lookup recognized nothing in {raw:?}");
            return ComplementLookup::NothingRecognized { unrecognized };
        }

        let scores = self.cooccurrence.combined_scores(&columns);
        let mut ranked: Vec<u32> = (0..self.vectorizer.vocabulary_size() as u32)
            .filter(|c| !columns.contains(c))
            .collect();
        ranked.sort_by(|a, b| {
            scores[*b as usize]
                .total_cmp(&scores[*a as usize])
                .then(a.cmp(b))
        });

        let suggestions: Vec<IngredientSuggestion> = ranked
            .into_iter()
            .take(count)
            .map(|c| IngredientSuggestion {
                ingredient: self.vectorizer.token(c).to_string(),
                score: scores[c as usize],
            })
            .collect();

        tracing::debug!(
            "Complements for {:?}: {} suggestions",
            recognized,
            suggestions.len()
        );

        ComplementLookup::Found {
            recognized,
            unrecognized,
            suggestions,
        }
    }

    fn describe(&self, neighbor: Neighbor) -> RecipeMatch {
        let recipe = self.dataset.get(neighbor.row);
        RecipeMatch {
            id: recipe.id,
            cuisine: recipe.cuisine.clone(),
            ingredients: recipe.ingredients.clone(),
            distance: neighbor.distance,
        }
    }

    fn not_found(&self, raw_id: &str) -> RecipeLookup {
        RecipeLookup::NotFound {
            input: raw_id.trim().to_string(),
            example_ids: self.example_ids.clone(),
        }
    }
}

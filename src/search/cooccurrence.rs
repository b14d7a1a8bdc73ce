use std::collections::HashMap;

use crate::search::vectorizer::SparseRow;

/// Ingredient co-occurrence fractions.
///
/// Entry (i, j) is the fraction of recipes containing ingredient i that also
/// contain ingredient j. The diagonal is zero. Stored as sparse rows sorted by
/// column since most ingredient pairs never meet.
pub struct CooccurrenceMatrix {
    rows: Vec<Vec<(u32, f32)>>,
}

impl CooccurrenceMatrix {
    pub fn build(recipes: &[SparseRow], n_columns: usize) -> Self {
        let mut pair_counts: Vec<HashMap<u32, u32>> = vec![HashMap::new(); n_columns];
        let mut recipe_counts = vec![0u32; n_columns];

        for recipe in recipes {
            let cols = recipe.columns();
            for &i in cols {
                let Some(counts) = pair_counts.get_mut(i as usize) else {
                    continue;
                };
                recipe_counts[i as usize] += 1;
                for &j in cols {
                    if i != j {
                        *counts.entry(j).or_insert(0) += 1;
                    }
                }
            }
        }

        let rows = pair_counts
            .into_iter()
            .zip(recipe_counts)
            .map(|(counts, total)| {
                let mut row: Vec<(u32, f32)> = counts
                    .into_iter()
                    .map(|(j, both)| (j, both as f32 / total as f32))
                    .collect();
                row.sort_unstable_by_key(|(j, _)| *j);
                row
            })
            .collect();

        Self { rows }
    }

    #[cfg(test)]
    pub fn get(&self, i: u32, j: u32) -> f32 {
        self.rows
            .get(i as usize)
            .and_then(|row| {
                row.binary_search_by_key(&j, |(c, _)| *c)
                    .ok()
                    .map(|pos| row[pos].1)
            })
            .unwrap_or(0.0)
    }

    /// Element-wise sum of the rows for `columns`, as a dense score per ingredient.
    pub fn combined_scores(&self, columns: &[u32]) -> Vec<f32> {
        let mut scores = vec![0.0f32; self.rows.len()];
        for &i in columns {
            if let Some(row) = self.rows.get(i as usize) {
                for &(j, value) in row {
                    scores[j as usize] += value;
                }
            }
        }
        scores
    }
}

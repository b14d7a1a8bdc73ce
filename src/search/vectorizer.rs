use anyhow::Result;
use std::collections::{HashMap, HashSet};

/// Separator between ingredients in a recipe line or user input.
pub const INGREDIENT_SEPARATOR: &str = ", ";

/// Split an ingredient line into tokens, dropping empty ones.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(INGREDIENT_SEPARATOR).filter(|t| !t.is_empty())
}

/// A binary sparse vector: the sorted, de-duplicated set of present columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseRow {
    columns: Vec<u32>,
}

impl SparseRow {
    pub fn from_columns(mut columns: Vec<u32>) -> Self {
        columns.sort_unstable();
        columns.dedup();
        Self { columns }
    }

    pub fn columns(&self) -> &[u32] {
        &self.columns
    }

    /// Number of present columns (the squared L2 norm of a binary row).
    pub fn nnz(&self) -> usize {
        self.columns.len()
    }

    #[cfg(test)]
    pub fn contains(&self, column: u32) -> bool {
        self.columns.binary_search(&column).is_ok()
    }

    /// Number of columns present in both rows.
    #[cfg(test)]
    pub fn intersection_len(&self, other: &SparseRow) -> usize {
        let (a, b) = (&self.columns, &other.columns);
        let (mut i, mut j, mut shared) = (0, 0, 0);
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    shared += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        shared
    }
}

/// Binary bag-of-ingredients vectorizer.
///
/// Vocabulary tokens are lowercased ingredient strings, sorted
/// lexicographically; a token's column is its position in that order.
/// Tokens present in more than `max_df` of the fitted recipes are dropped.
pub struct IngredientVectorizer {
    vocabulary: Vec<String>,
    columns: HashMap<String, u32>,
}

impl IngredientVectorizer {
    /// Learn the vocabulary from a corpus of ingredient lines.
    pub fn fit<S: AsRef<str>>(documents: &[S], max_df: f64) -> Result<Self> {
        anyhow::ensure!(
            max_df > 0.0 && max_df <= 1.0,
            "max_df must be in (0, 1], got {max_df}"
        );

        let mut doc_frequencies: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let lowered = doc.as_ref().to_lowercase();
            let unique: HashSet<&str> = tokenize(&lowered).collect();
            for token in unique {
                *doc_frequencies.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        let max_doc_count = max_df * documents.len() as f64;
        let mut vocabulary: Vec<String> = doc_frequencies
            .into_iter()
            .filter(|(_, df)| *df as f64 <= max_doc_count)
            .map(|(token, _)| token)
            .collect();
        vocabulary.sort();

        anyhow::ensure!(
            !vocabulary.is_empty(),
            "max_df={max_df} leaves no ingredients in the vocabulary"
        );

        let columns = vocabulary
            .iter()
            .enumerate()
            .map(|(i, token)| (token.clone(), i as u32))
            .collect();

        Ok(Self {
            vocabulary,
            columns,
        })
    }

    /// Fit the vocabulary and vectorize the same corpus.
    pub fn fit_transform<S: AsRef<str>>(
        documents: &[S],
        max_df: f64,
    ) -> Result<(Self, Vec<SparseRow>)> {
        let vectorizer = Self::fit(documents, max_df)?;
        let rows = documents
            .iter()
            .map(|doc| vectorizer.transform(doc.as_ref()))
            .collect();
        Ok((vectorizer, rows))
    }

    /// Project an ingredient line into the vocabulary space. Unknown tokens are ignored.
    pub fn transform(&self, text: &str) -> SparseRow {
        let lowered = text.to_lowercase();
        let columns = tokenize(&lowered)
            .filter_map(|token| self.columns.get(token).copied())
            .collect();
        SparseRow::from_columns(columns)
    }

    /// Column of an exact vocabulary token.
    pub fn column(&self, token: &str) -> Option<u32> {
        self.columns.get(token).copied()
    }

    pub fn token(&self, column: u32) -> &str {
        &self.vocabulary[column as usize]
    }

    #[cfg(test)]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Number of columns.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

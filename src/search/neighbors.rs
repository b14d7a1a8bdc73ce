use crate::search::vectorizer::SparseRow;

/// A row found by a nearest-neighbor query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub row: usize,
    pub distance: f32,
}

/// Brute-force Euclidean nearest-neighbor index over binary sparse rows.
///
/// Keeps a column -> rows posting list so intersections with a query are
/// counted from the query's columns instead of row by row. For binary rows
/// `|a - b|² = |a| + |b| - 2·|a ∩ b|`, so distances are exact integers under
/// the square root and ties are broken by row index.
pub struct NeighborIndex {
    rows: Vec<SparseRow>,
    postings: Vec<Vec<u32>>,
}

impl NeighborIndex {
    pub fn new(rows: Vec<SparseRow>, n_columns: usize) -> Self {
        let mut postings = vec![Vec::new(); n_columns];
        for (r, row) in rows.iter().enumerate() {
            for &c in row.columns() {
                if let Some(list) = postings.get_mut(c as usize) {
                    list.push(r as u32);
                }
            }
        }
        Self { rows, postings }
    }

    pub fn row(&self, index: usize) -> &SparseRow {
        &self.rows[index]
    }

    /// The `k` rows closest to `query`, nearest first.
    pub fn kneighbors(&self, query: &SparseRow, k: usize) -> Vec<Neighbor> {
        self.kneighbors_where(query, k, |_| true)
    }

    /// The `k` rows closest to `query` among rows accepted by `filter`, nearest first.
    pub fn kneighbors_where<F>(&self, query: &SparseRow, k: usize, filter: F) -> Vec<Neighbor>
    where
        F: Fn(usize) -> bool,
    {
        if k == 0 || self.rows.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(u64, usize)> = self
            .squared_distances(query)
            .into_iter()
            .enumerate()
            .filter(|(r, _)| filter(*r))
            .map(|(r, sq)| (sq, r))
            .collect();

        if k < scored.len() {
            scored.select_nth_unstable(k - 1);
            scored.truncate(k);
        }
        scored.sort_unstable();

        scored.into_iter().map(to_neighbor).collect()
    }

    /// Every row ordered by distance to `query`, nearest first. Distances are
    /// computed once for the whole walk.
    pub fn ranked(&self, query: &SparseRow) -> impl Iterator<Item = Neighbor> {
        let mut scored: Vec<(u64, usize)> = self
            .squared_distances(query)
            .into_iter()
            .enumerate()
            .map(|(r, sq)| (sq, r))
            .collect();
        scored.sort_unstable();
        scored.into_iter().map(to_neighbor)
    }

    /// Squared Euclidean distance from `query` to every row, by row index.
    fn squared_distances(&self, query: &SparseRow) -> Vec<u64> {
        let mut shared = vec![0u32; self.rows.len()];
        for &c in query.columns() {
            if let Some(list) = self.postings.get(c as usize) {
                for &r in list {
                    shared[r as usize] += 1;
                }
            }
        }

        let q = query.nnz() as u64;
        self.rows
            .iter()
            .zip(shared)
            .map(|(row, both)| q + row.nnz() as u64 - 2 * both as u64)
            .collect()
    }
}

fn to_neighbor((sq, row): (u64, usize)) -> Neighbor {
    Neighbor {
        row,
        distance: (sq as f32).sqrt(),
    }
}

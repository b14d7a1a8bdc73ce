//! Vector space over ingredients: vocabulary, nearest-neighbor index, and co-occurrence.

pub mod cooccurrence;
pub mod neighbors;
pub mod vectorizer;

//! Fuzzy string matching based on edit distance.
//!
//! This crate provides:
//! - Levenshtein edit distance over Unicode scalar values
//! - Similarity scores normalized to `0.0..=1.0`
//! - Unicode normalization (diacritic and compatibility folding)
//! - Ranked search with threshold and limit
//! - WASM bindings for browser usage
//!
//! Scoring is `O(len(a) * len(b))` per pair and is meant for short strings
//! such as names, words and titles rather than whole documents.
//!
//! # Example
//!
//! ```
//! use fast_fuzzy::{fuzzy, search, SearchOptions};
//!
//! assert_eq!(fuzzy("café", "cafe", true), 1.0);
//!
//! let options = SearchOptions::builder().normalize(true).build().unwrap();
//! let results = search("cafe", &["café", "naïve", "résumé"], &options);
//! assert_eq!(results[0].item, "café");
//! ```

mod distance;
mod error;
mod normalize;
mod options;
mod score;
mod search;

#[cfg(feature = "wasm")]
mod wasm;

pub use distance::levenshtein_distance;
pub use error::{Result, SearchError, SearchErrorCode};
pub use normalize::{normalize_string, Normalizer};
pub use options::{SearchOptions, SearchOptionsBuilder};
pub use score::{fuzzy, fuzzy_with, similarity};
pub use search::{search, search_by, Searcher};

/// Search result with similarity score.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SearchResult<T> {
    /// The matched item, exactly as supplied
    pub item: T,
    /// Similarity score in `0.0..=1.0` (higher is better)
    pub score: f64,
    /// Position of the item in the searched collection
    pub index: usize,
}

impl<T> SearchResult<T> {
    /// Maps the item, keeping score and index.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SearchResult<U> {
        SearchResult {
            item: f(self.item),
            score: self.score,
            index: self.index,
        }
    }
}

//! Ranking a candidate collection against a query.

use tracing::{debug, instrument, trace};

use crate::{similarity, Normalizer, SearchOptions, SearchResult};

/// A query prepared for repeated scoring.
///
/// The comparison form of the query is computed once at construction and
/// reused for every candidate.
///
/// # Example
/// ```
/// use fast_fuzzy::{SearchOptions, Searcher};
///
/// let searcher = Searcher::new("APPLE", &SearchOptions::default());
/// assert_eq!(searcher.score("apple"), 1.0);
///
/// let results = searcher.search(&["banana", "apple", "apply"]);
/// assert_eq!(results[0].item, "apple");
/// assert_eq!(results[0].index, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Searcher {
    query: String,
    normalizer: Normalizer,
    threshold: f64,
    limit: Option<usize>,
}

impl Searcher {
    /// Prepares `query` for searching under `options`.
    pub fn new(query: &str, options: &SearchOptions) -> Self {
        let normalizer = options.normalizer();
        Self {
            query: normalizer.apply(query).into_owned(),
            normalizer,
            threshold: options.threshold(),
            limit: options.limit(),
        }
    }

    /// The comparison form of the query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Scores a single candidate against the query.
    pub fn score(&self, candidate: &str) -> f64 {
        similarity(&self.query, &self.normalizer.apply(candidate))
    }

    /// Ranks `candidates`, returning owned copies of the matching strings.
    pub fn search<S>(&self, candidates: &[S]) -> Vec<SearchResult<String>>
    where
        S: AsRef<str> + Sync,
    {
        self.rank(candidates, |candidate| candidate.as_ref())
            .into_iter()
            .map(|result| result.map(|item| item.as_ref().to_owned()))
            .collect()
    }

    /// Ranks arbitrary items by the text `key` extracts from each.
    pub fn search_by<'a, T, F>(&self, items: &'a [T], key: F) -> Vec<SearchResult<&'a T>>
    where
        T: Sync,
        F: Fn(&T) -> &str + Sync,
    {
        self.rank(items, key)
    }

    #[instrument(level = "debug", skip_all, fields(candidates = items.len()))]
    fn rank<'a, T, F>(&self, items: &'a [T], key: F) -> Vec<SearchResult<&'a T>>
    where
        T: Sync,
        F: Fn(&T) -> &str + Sync,
    {
        let score_item = |(index, item): (usize, &'a T)| {
            let score = self.score(key(item));
            trace!(index, score, "scored candidate");
            (score >= self.threshold).then_some(SearchResult { item, score, index })
        };

        #[cfg(feature = "parallel")]
        let mut results: Vec<_> = {
            use rayon::prelude::*;
            items.par_iter().enumerate().filter_map(score_item).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let mut results: Vec<_> = items.iter().enumerate().filter_map(score_item).collect();

        // Stable sort: equal scores keep their input order.
        results.sort_by(|a, b| b.score.total_cmp(&a.score));

        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        debug!(matched = results.len(), threshold = self.threshold, "search complete");

        results
    }
}

/// Rank `candidates` by similarity to `query`.
///
/// Results are sorted by descending score; equal scores keep the order of
/// `candidates`. Each result carries the original candidate text, its score
/// and its position in `candidates`.
///
/// # Example
/// ```
/// use fast_fuzzy::{search, SearchOptions};
///
/// let fruits = ["apple", "application", "apply", "banana"];
/// let results = search("apple", &fruits, &SearchOptions::default());
///
/// assert_eq!(results[0].item, "apple");
/// assert_eq!(results[0].score, 1.0);
/// ```
pub fn search<S>(query: &str, candidates: &[S], options: &SearchOptions) -> Vec<SearchResult<String>>
where
    S: AsRef<str> + Sync,
{
    Searcher::new(query, options).search(candidates)
}

/// Rank `items` by the similarity of `key(item)` to `query`.
///
/// # Example
/// ```
/// use fast_fuzzy::{search_by, SearchOptions};
///
/// struct City { name: &'static str, population: u32 }
///
/// let cities = [
///     City { name: "München", population: 1_500_000 },
///     City { name: "Münster", population: 320_000 },
/// ];
/// let options = SearchOptions::builder().normalize(true).build().unwrap();
/// let results = search_by("munchen", &cities, |city| city.name, &options);
///
/// assert_eq!(results[0].item.population, 1_500_000);
/// ```
pub fn search_by<'a, T, F>(
    query: &str,
    items: &'a [T],
    key: F,
    options: &SearchOptions,
) -> Vec<SearchResult<&'a T>>
where
    T: Sync,
    F: Fn(&T) -> &str + Sync,
{
    Searcher::new(query, options).search_by(items, key)
}

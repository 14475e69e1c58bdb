//! Search configuration.
//!
//! [`SearchOptions`] is always valid once constructed: every route into it
//! (builder, serde, JSON) goes through the same checks.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Normalizer, Result, SearchError};

/// Validated options for [`search`](crate::search).
///
/// | Option        | Default     |
/// |---------------|-------------|
/// | `threshold`   | `0.0`       |
/// | `limit`       | unbounded   |
/// | `ignore_case` | `true`      |
/// | `normalize`   | `false`     |
///
/// # Example
/// ```
/// use fast_fuzzy::SearchOptions;
///
/// let options = SearchOptions::builder()
///     .threshold(0.5)
///     .limit(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(options.limit(), Some(3));
/// assert!(options.ignore_case());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SearchOptionsBuilder", into = "SearchOptionsBuilder")]
pub struct SearchOptions {
    threshold: f64,
    limit: Option<usize>,
    ignore_case: bool,
    normalize: bool,
}

impl SearchOptions {
    /// Default minimum score; admits every candidate.
    pub const DEFAULT_THRESHOLD: f64 = 0.0;

    /// Starts a builder with every option unset.
    pub fn builder() -> SearchOptionsBuilder {
        SearchOptionsBuilder::default()
    }

    /// Parses options from a JSON object such as
    /// `{"threshold": 0.5, "limit": 10, "ignoreCase": true}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let builder: SearchOptionsBuilder = serde_json::from_str(json)?;
        builder.build()
    }

    /// Minimum score for a candidate to be returned.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Maximum number of results, `None` for unbounded.
    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Whether case is folded before comparing.
    #[inline]
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Whether diacritics and compatibility forms are folded before comparing.
    #[inline]
    pub fn normalize(&self) -> bool {
        self.normalize
    }

    /// The normalizer producing comparison forms under these options.
    #[inline]
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.ignore_case, self.normalize)
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            limit: None,
            ignore_case: true,
            normalize: false,
        }
    }
}

/// Unvalidated options; every field is optional and falls back to the
/// [`SearchOptions`] default.
///
/// This is also the serialized shape of [`SearchOptions`]. Keys are
/// snake_case, and `ignoreCase` is accepted as an alias.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchOptionsBuilder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    threshold: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,

    #[serde(default, alias = "ignoreCase", skip_serializing_if = "Option::is_none")]
    ignore_case: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    normalize: Option<bool>,
}

impl SearchOptionsBuilder {
    /// Minimum score, clamped into `0.0..=1.0`; must not be NaN or infinite.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Maximum number of results; must be at least one.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Fold case before comparing.
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = Some(ignore_case);
        self
    }

    /// Fold diacritics and compatibility forms before comparing.
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = Some(normalize);
        self
    }

    /// Validates and produces the options.
    ///
    /// A finite threshold outside `0.0..=1.0` is clamped into range. A NaN
    /// or infinite threshold and a zero limit are rejected.
    pub fn build(self) -> Result<SearchOptions> {
        let defaults = SearchOptions::default();

        let threshold = match self.threshold {
            None => defaults.threshold,
            Some(t) if !t.is_finite() => return Err(SearchError::InvalidThreshold(t)),
            Some(t) if !(0.0..=1.0).contains(&t) => {
                let clamped = t.clamp(0.0, 1.0);
                warn!(threshold = t, clamped, "threshold out of range, clamping");
                clamped
            }
            Some(t) => t,
        };

        let limit = match self.limit {
            Some(0) => return Err(SearchError::InvalidLimit(0)),
            limit => limit,
        };

        Ok(SearchOptions {
            threshold,
            limit,
            ignore_case: self.ignore_case.unwrap_or(defaults.ignore_case),
            normalize: self.normalize.unwrap_or(defaults.normalize),
        })
    }
}

impl TryFrom<SearchOptionsBuilder> for SearchOptions {
    type Error = SearchError;

    fn try_from(builder: SearchOptionsBuilder) -> Result<Self> {
        builder.build()
    }
}

impl From<SearchOptions> for SearchOptionsBuilder {
    fn from(options: SearchOptions) -> Self {
        Self {
            threshold: Some(options.threshold),
            limit: options.limit,
            ignore_case: Some(options.ignore_case),
            normalize: Some(options.normalize),
        }
    }
}

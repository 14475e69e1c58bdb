//! Similarity scores in `0.0..=1.0`.

use crate::{levenshtein_distance, normalize_string, Normalizer};

/// Similarity of two strings already in comparison form.
///
/// `1 - distance / max_len` where lengths count chars, clamped to
/// `0.0..=1.0`. Identical strings (including two empty strings) score `1.0`;
/// an empty string against a non-empty one scores `0.0`.
///
/// # Example
/// ```
/// use fast_fuzzy::similarity;
///
/// assert_eq!(similarity("", ""), 1.0);
/// assert_eq!(similarity("abc", ""), 0.0);
/// assert_eq!(similarity("abcd", "abce"), 0.75);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let distance = levenshtein_distance(a, b);
    let max_len = a.chars().count().max(b.chars().count()) as f64;

    (1.0 - distance as f64 / max_len).clamp(0.0, 1.0)
}

/// Score two strings, optionally normalizing both first.
///
/// With `normalize` set, both inputs go through [`normalize_string`] with
/// lowercasing, so accents, compatibility forms, whitespace runs and case
/// are all ignored. Without it the comparison is exact and case-sensitive.
/// Use [`fuzzy_with`] to pick the steps individually.
///
/// # Example
/// ```
/// use fast_fuzzy::fuzzy;
///
/// assert_eq!(fuzzy("café", "cafe", true), 1.0);
/// assert!(fuzzy("café", "cafe", false) < 1.0);
/// ```
pub fn fuzzy(a: &str, b: &str, normalize: bool) -> f64 {
    if normalize {
        similarity(&normalize_string(a, true), &normalize_string(b, true))
    } else {
        similarity(a, b)
    }
}

/// Score two strings after passing both through `normalizer`.
pub fn fuzzy_with(a: &str, b: &str, normalizer: &Normalizer) -> f64 {
    similarity(&normalizer.apply(a), &normalizer.apply(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_strings() {
        assert_eq!(fuzzy("", "", false), 1.0);
        assert_eq!(fuzzy("", "", true), 1.0);
    }

    #[test]
    fn test_empty_against_non_empty() {
        assert_eq!(fuzzy("abc", "", false), 0.0);
        assert_eq!(fuzzy("", "abc", false), 0.0);
        assert_eq!(fuzzy("abc", "", true), 0.0);
    }

    #[test]
    fn test_identical() {
        assert_eq!(fuzzy("hello world", "hello world", false), 1.0);
        assert_eq!(fuzzy("日本語", "日本語", false), 1.0);
    }

    #[test]
    fn test_normalize_folds_accents() {
        assert_eq!(fuzzy("café", "cafe", true), 1.0);
        assert_eq!(fuzzy("Résumé", "resume", true), 1.0);
    }

    #[test]
    fn test_without_normalize_is_case_sensitive() {
        assert!(fuzzy("Apple", "apple", false) < 1.0);
        assert_eq!(fuzzy("Apple", "apple", true), 1.0);
    }

    #[test]
    fn test_disjoint_equal_length() {
        assert_eq!(fuzzy("abc", "xyz", false), 0.0);
    }

    #[test]
    fn test_score_uses_char_length() {
        // One substitution over four chars, not over five bytes.
        assert_eq!(similarity("café", "cafe"), 0.75);
    }

    #[test]
    fn test_single_typo() {
        let score = fuzzy("hello world", "helo wrold", false);
        assert!(score > 0.7 && score < 1.0, "score was {score}");
    }

    #[test]
    fn test_fuzzy_with_case_only() {
        let normalizer = Normalizer::new(true, false);
        assert_eq!(fuzzy_with("APPLE", "apple", &normalizer), 1.0);
        assert!(fuzzy_with("CAFÉ", "cafe", &normalizer) < 1.0);
    }

    #[test]
    fn test_fuzzy_with_case_only_dotted_capital_i() {
        let normalizer = Normalizer::new(true, false);
        assert_eq!(fuzzy_with("İSTANBUL", "istanbul", &normalizer), 1.0);
    }

    #[test]
    fn test_fuzzy_with_normalize_keeping_case() {
        let normalizer = Normalizer::new(false, true);
        assert_eq!(fuzzy_with("Café", "Cafe", &normalizer), 1.0);
        assert!(fuzzy_with("Café", "cafe", &normalizer) < 1.0);
    }
}

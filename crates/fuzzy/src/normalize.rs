//! Comparison forms for strings.
//!
//! Scoring never looks at the caller's text directly. Both sides are first
//! turned into a comparison form: optionally case folded, and optionally
//! stripped of diacritics and compatibility variants. The comparison form is
//! internal; search results always carry the original text.

use std::borrow::Cow;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for comparison.
///
/// - NFKD decomposition, which also folds full-width and other compatibility
///   forms (`ｆ` -> `f`, `ﬁ` -> `fi`)
/// - Removal of combining marks (accents and other diacritics)
/// - Optional lowercasing
/// - Whitespace runs collapsed to a single space, ends trimmed
///
/// # Example
/// ```
/// use fast_fuzzy::normalize_string;
///
/// assert_eq!(normalize_string("Café", true), "cafe");
/// assert_eq!(normalize_string("  Hello\tWorld\n", false), "Hello World");
/// ```
pub fn normalize_string(input: &str, to_lowercase: bool) -> String {
    let stripped: String = input.nfkd().filter(|c| !is_combining_mark(*c)).collect();

    let folded = if to_lowercase {
        stripped.to_lowercase()
    } else {
        stripped
    };

    collapse_whitespace(&folded)
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercase `input` without introducing combining marks.
///
/// U+0130 (`İ`) is the only character whose lowercase mapping is longer than
/// one char: `i` followed by U+0307. It folds to a plain `i` here so that
/// case folding alone never adds an edit.
fn fold_case(input: &str) -> String {
    if input.contains('\u{0130}') {
        input.replace('\u{0130}', "i").to_lowercase()
    } else {
        input.to_lowercase()
    }
}

/// Which transformations produce the comparison form of a string.
///
/// `ignore_case` governs case folding only; `normalize` governs diacritic,
/// compatibility and whitespace folding only. The two compose.
///
/// Case folding uses the locale-independent Unicode lowercase mapping,
/// except that `İ` folds to `i` instead of `i` plus a combining dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Normalizer {
    /// Fold case before comparing
    pub ignore_case: bool,
    /// Strip diacritics and fold compatibility variants
    pub normalize: bool,
}

impl Normalizer {
    /// Creates a normalizer with the given steps enabled.
    #[inline]
    pub fn new(ignore_case: bool, normalize: bool) -> Self {
        Self { ignore_case, normalize }
    }

    /// A normalizer applying every step.
    #[inline]
    pub fn full() -> Self {
        Self::new(true, true)
    }

    /// Returns the comparison form of `input`.
    ///
    /// Borrows the input untouched when no step is enabled.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match (self.normalize, self.ignore_case) {
            (true, ignore_case) => Cow::Owned(normalize_string(input, ignore_case)),
            (false, true) => Cow::Owned(fold_case(input)),
            (false, false) => Cow::Borrowed(input),
        }
    }
}

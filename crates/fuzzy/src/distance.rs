//! Levenshtein edit distance.

/// Calculate Levenshtein edit distance between two strings.
///
/// Insertions, deletions and substitutions all cost one edit. Strings are
/// compared as Unicode scalar values; when both inputs are ASCII the bytes
/// are compared directly instead.
///
/// Runs in `O(len(a) * len(b))` time and keeps two rows of the edit matrix,
/// sized by the shorter input.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
///
/// # Example
/// ```
/// use fast_fuzzy::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    if a.is_ascii() && b.is_ascii() {
        return edit_distance(a.as_bytes(), b.as_bytes());
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    edit_distance(&a_chars, &b_chars)
}

fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Distance is symmetric; keep the rows as short as possible.
    let (a, b) = if a.len() < b.len() { (b, a) } else { (a, b) };

    let m = a.len();
    let n = b.len();

    if n == 0 { return m; }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE_EDITS: [(&str, &str, usize); 8] = [
        ("hello", "hello", 0),
        ("hello", "hallo", 1),
        ("helo", "hello", 1),
        ("hello", "helo", 1),
        ("héllo", "héllo", 0),
        ("héllo", "hällo", 1),
        ("hélo", "héllo", 1),
        ("héllo", "hélo", 1),
    ];

    #[test]
    fn test_levenshtein_single_edits() {
        for (a, b, expected) in SINGLE_EDITS {
            assert_eq!(levenshtein_distance(a, b), expected, "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_byte_and_char_paths_agree() {
        for (a, b, _) in SINGLE_EDITS.iter().filter(|(a, b, _)| a.is_ascii() && b.is_ascii()) {
            let a_chars: Vec<char> = a.chars().collect();
            let b_chars: Vec<char> = b.chars().collect();
            assert_eq!(edit_distance(a.as_bytes(), b.as_bytes()), edit_distance(&a_chars, &b_chars));
        }
    }

    #[test]
    fn test_levenshtein_classic_pairs() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
        assert_eq!(levenshtein_distance("sitting", "kitten"), 3);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
    }

    #[test]
    fn test_levenshtein_counts_chars_not_bytes() {
        // 'é' is two bytes in UTF-8 but a single substitution.
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
        assert_eq!(levenshtein_distance("北京", "東京"), 1);
        assert_eq!(levenshtein_distance("", "日本"), 2);
    }

    #[test]
    fn test_levenshtein_disjoint() {
        assert_eq!(levenshtein_distance("abc", "xyz"), 3);
    }
}

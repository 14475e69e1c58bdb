//! End-to-end ranking behavior over a small fruit catalogue.

use fast_fuzzy::{fuzzy, search, SearchOptions, SearchResult};

fn data() -> Vec<String> {
    [
        "apple", "application", "apply", "banana", "cherry", "date", "elderberry", "fig",
        "grape", "honeydew", "kiwi", "lemon", "mango", "nectarine", "orange", "papaya",
        "pineapple", "quince", "raspberry", "strawberry", "tangerine", "watermelon",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[test]
fn exact_match_ranks_first() {
    let results = search("apple", &data(), &SearchOptions::default());
    assert_eq!(
        results[0],
        SearchResult { item: "apple".to_string(), score: 1.0, index: 0 }
    );
}

#[test]
fn prefix_query_surfaces_containing_items() {
    let results = search("app", &data(), &SearchOptions::default());
    assert!(!results.is_empty());
    for result in results.iter().take(2) {
        assert!(result.item.to_lowercase().contains("app"), "{} ranked too high", result.item);
    }
}

#[test]
fn high_threshold_excludes_unrelated_query() {
    let options = SearchOptions::builder().threshold(0.5).build().unwrap();
    assert!(search("xyz", &data(), &options).is_empty());
}

#[test]
fn limit_caps_result_count() {
    let options = SearchOptions::builder().limit(3).build().unwrap();
    let results = search("a", &data(), &options);
    assert!(results.len() <= 3);
    for window in results.windows(2) {
        assert!(window[0].score >= window[1].score);
    }
}

#[test]
fn ignore_case_matches_uppercase_query() {
    let options = SearchOptions::builder().ignore_case(true).build().unwrap();
    let results = search("APPLE", &data(), &options);
    assert_eq!(results[0].item, "apple");
    assert_eq!(results[0].score, 1.0);
}

#[test]
fn normalize_matches_accented_candidates() {
    let options = SearchOptions::builder().normalize(true).build().unwrap();
    let results = search("cafe", &["café", "naïve", "résumé"], &options);
    assert_eq!(results[0].item, "café");
    assert_eq!(results[0].score, 1.0);
}

#[test]
fn without_normalize_accents_count_as_edits() {
    let results = search("cafe", &["café"], &SearchOptions::default());
    assert_eq!(results[0].score, 0.75);
}

#[test]
fn full_width_query_matches_with_normalize() {
    let options = SearchOptions::builder().normalize(true).build().unwrap();
    let results = search("ＡＰＰＬＥ", &data(), &options);
    assert_eq!(results[0].item, "apple");
    assert_eq!(results[0].score, 1.0);
}

#[test]
fn repeated_searches_are_identical() {
    let options = SearchOptions::builder().threshold(0.2).limit(5).build().unwrap();
    let first = search("berry", &data(), &options);
    let second = search("berry", &data(), &options);
    assert_eq!(first, second);
}

#[test]
fn equal_scores_keep_collection_order() {
    let candidates = ["bat", "cot", "hat", "cut", "mat"];
    let results = search("cat", &candidates, &SearchOptions::default());
    let indices: Vec<_> = results.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
}

#[test]
fn index_points_back_into_collection() {
    let items = data();
    let results = search("mango", &items, &SearchOptions::default());
    for result in &results {
        assert_eq!(items[result.index], result.item);
    }
}

#[test]
fn fuzzy_edge_cases() {
    assert_eq!(fuzzy("", "", false), 1.0);
    assert_eq!(fuzzy("apple", "", false), 0.0);
    assert_eq!(fuzzy("", "apple", false), 0.0);
    assert_eq!(fuzzy("apple", "apple", false), 1.0);
    assert_eq!(fuzzy("café", "cafe", true), 1.0);
}

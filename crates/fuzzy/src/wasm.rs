//! WASM bindings for fuzzy search.

use wasm_bindgen::prelude::*;

use crate::SearchOptions;

/// Similarity score between two strings (0.0 to 1.0).
///
/// `normalize` defaults to true: accents, compatibility forms and case are
/// ignored.
#[wasm_bindgen]
pub fn fuzzy(a: &str, b: &str, normalize: Option<bool>) -> f64 {
    crate::fuzzy(a, b, normalize.unwrap_or(true))
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen(js_name = editDistance)]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Search items and return sorted results as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `items_json` - JSON array of strings
/// * `options_json` - Optional JSON object with `threshold`, `limit`,
///   `ignoreCase` and `normalize`
///
/// # Returns
/// JSON array of `{item, score, index}` objects, best match first.
/// Malformed JSON or invalid options throw.
#[wasm_bindgen(js_name = search)]
pub fn search_json(query: &str, items_json: &str, options_json: Option<String>) -> Result<String, JsError> {
    let items: Vec<String> = serde_json::from_str(items_json)
        .map_err(|e| JsError::new(&format!("Invalid items: {}", e)))?;

    let options = match options_json.as_deref() {
        Some(json) => SearchOptions::from_json(json)?,
        None => SearchOptions::default(),
    };

    let results = crate::search(query, &items, &options);
    Ok(serde_json::to_string(&results)?)
}

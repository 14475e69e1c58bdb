//! Terminal output utilities

use fast_fuzzy::SearchResult;
use owo_colors::{OwoColorize, Stream};

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".if_supports_color(Stream::Stderr, |t| t.yellow()), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!("{}", message.if_supports_color(Stream::Stdout, |t| t.bold()));
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Format a score with four decimal places
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Print ranked results as an aligned table
pub fn print_results(query: &str, results: &[SearchResult<String>]) {
    if results.is_empty() {
        Status::warning(&format!("No matches for \"{}\"", query));
        return;
    }

    Status::header(&format!(
        "{} for \"{}\"",
        format_count(results.len(), "match", "matches"),
        query
    ));

    for result in results {
        let score = format_score(result.score);
        let score = if result.score >= 0.8 {
            score.if_supports_color(Stream::Stdout, |t| t.green()).to_string()
        } else if result.score >= 0.5 {
            score.if_supports_color(Stream::Stdout, |t| t.yellow()).to_string()
        } else {
            score.if_supports_color(Stream::Stdout, |t| t.dimmed()).to_string()
        };
        println!("{}  {}", score, result.item);
    }
}

//! Fuzzy matching of catalog entries against a user query.
//!
//! Two scoring tiers: a literal (case-insensitive) substring of an entry's
//! name or filename scores 100, so exact matches always rank at or above
//! fuzzy ones; everything else scores by normalized edit-distance
//! similarity scaled to 0..100. Weak matches are dropped and the list is
//! capped, so a search always fits on one menu page or two.

use std::cmp::Ordering;

use strsim::normalized_levenshtein;

use crate::models::IndexEntry;

/// Upper bound on returned matches.
pub const MAX_RESULTS: usize = 15;
/// Scores at or below this are considered noise.
const MIN_SCORE: f64 = 30.0;
const SUBSTRING_SCORE: f64 = 100.0;

/// Score `entries` against `query`, best match first.
///
/// Ties keep catalog order (stable sort). Callers treat an empty query as
/// "clear search" and never pass it here.
pub fn search(query: &str, entries: &[IndexEntry]) -> Vec<IndexEntry> {
    let query = query.to_lowercase();
    let mut scored: Vec<(f64, &IndexEntry)> = entries
        .iter()
        .filter_map(|entry| {
            let score = score_entry(&query, entry);
            (score > MIN_SCORE).then_some((score, entry))
        })
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.truncate(MAX_RESULTS);
    scored.into_iter().map(|(_, entry)| entry.clone()).collect()
}

fn score_entry(query: &str, entry: &IndexEntry) -> f64 {
    let name = entry.name.to_lowercase();
    let filename = entry.filename.to_lowercase();

    if name.contains(query) || filename.contains(query) {
        return SUBSTRING_SCORE;
    }

    100.0 * normalized_levenshtein(query, &name).max(normalized_levenshtein(query, &filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(index: usize, name: &str) -> IndexEntry {
        IndexEntry {
            index,
            name: name.to_string(),
            filename: format!("{:03}_{}.json", index, name.replace(' ', "_")),
            uuid: None,
        }
    }

    #[test]
    fn test_identical_name_scores_100() {
        let entries = vec![entry(1, "rust lifetimes")];
        assert_eq!(score_entry("rust lifetimes", &entries[0]), 100.0);
    }

    #[test]
    fn test_substring_match_is_exact_tier() {
        let e = entry(1, "Debugging Rust lifetimes");
        assert_eq!(score_entry("rust", &e), 100.0);
    }

    #[test]
    fn test_filename_substring_matches_too() {
        let e = IndexEntry {
            index: 7,
            name: "Totally different".to_string(),
            filename: "007_rust_notes.json".to_string(),
            uuid: None,
        };
        assert_eq!(score_entry("rust_notes", &e), 100.0);
    }

    #[test]
    fn test_substring_outranks_fuzzy() {
        let fuzzy_only = entry(1, "rest lifetimes");
        let substring = entry(2, "rust lifetimes");
        let results = search("rust lifetimes", &[fuzzy_only.clone(), substring.clone()]);
        assert_eq!(results[0].index, 2);
        assert!(score_entry("rust lifetimes", &substring) >= score_entry("rust lifetimes", &fuzzy_only));
    }

    #[test]
    fn test_results_sorted_descending() {
        let entries = vec![
            entry(1, "zzzz"),
            entry(2, "rust basics"),
            entry(3, "rust basecs extra words"),
        ];
        let results = search("rust basics", &entries);
        let scores: Vec<f64> =
            results.iter().map(|e| score_entry("rust basics", e)).collect();
        for pair in scores.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn test_weak_matches_dropped() {
        let entries = vec![entry(1, "zzzzzzzzzzzzzzzzzzzz")];
        // filename shares no letters with the query either
        let results = search("rust", &entries);
        assert!(results.is_empty());
    }

    #[test]
    fn test_result_count_capped_at_15() {
        let entries: Vec<IndexEntry> =
            (1..=40).map(|i| entry(i, &format!("rust topic {}", i))).collect();
        let results = search("rust", &entries);
        assert_eq!(results.len(), MAX_RESULTS);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let entries: Vec<IndexEntry> =
            (1..=5).map(|i| entry(i, &format!("rust topic {}", i))).collect();
        let results = search("rust", &entries);
        let order: Vec<usize> = results.iter().map(|e| e.index).collect();
        assert_eq!(order, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_query_case_insensitive() {
        let entries = vec![entry(1, "Rust Lifetimes")];
        assert_eq!(search("RUST", &entries).len(), 1);
    }

    #[test]
    fn test_near_miss_scores_between_tiers() {
        // one substitution away, so not a substring of name or filename
        let e = entry(1, "rust basics");
        let score = score_entry("rust basocs", &e);
        assert!(score > MIN_SCORE && score < 100.0);
    }
}

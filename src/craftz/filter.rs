//! Exact-substring-first, fuzzy-fallback ranking.
//!
//! A candidate whose normalized label contains every query token scores a
//! flat 100. Anything else gets a partial-ratio score (the best
//! edit-similarity between the shorter string and any equally long window
//! of the longer) and survives only at [`PARTIAL_MATCH_FLOOR`] or above.
//! This is a filter, not a re-ranking: candidates below the floor are
//! dropped.

use strsim::normalized_levenshtein;

/// Minimum partial score for a candidate to stay in the result set.
pub const PARTIAL_MATCH_FLOOR: u8 = 70;

const EXACT_SCORE: u8 = 100;

/// Rank `items` against `query`, scoring each by the label `label_of`
/// produces for it. Labels are lowercased here; callers fold underscores
/// into the label when the candidate set warrants it (item identifiers
/// do, recipe labels don't).
///
/// An empty or whitespace query returns the items unchanged. Otherwise
/// exact matches come first, then partial matches, each group in
/// descending score order with ties keeping input order.
pub fn rank_by<T, F>(query: &str, items: Vec<T>, label_of: F) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items;
    }
    let terms: Vec<&str> = query.split_whitespace().collect();

    let mut exact: Vec<(T, u8)> = Vec::new();
    let mut partial: Vec<(T, u8)> = Vec::new();

    for item in items {
        let label = label_of(&item).to_lowercase();
        if terms.iter().all(|term| label.contains(term)) {
            exact.push((item, EXACT_SCORE));
        } else {
            let score = partial_ratio(&query, &label);
            if score >= PARTIAL_MATCH_FLOOR {
                partial.push((item, score));
            }
        }
    }

    // Stable sort over the concatenation: exact entries keep their lead on
    // score ties with 100-scoring partials.
    let mut ranked = exact;
    ranked.extend(partial);
    ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
    ranked.into_iter().map(|(item, _)| item).collect()
}

/// Best-aligned substring similarity between `a` and `b`, in [0, 100].
///
/// The shorter string slides over every equally long character window of
/// the longer; the best normalized Levenshtein similarity wins.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short_len = shorter.chars().count();
    let long_chars: Vec<char> = longer.chars().collect();

    if short_len == 0 {
        return if long_chars.is_empty() { 100 } else { 0 };
    }
    if short_len == long_chars.len() {
        return to_score(normalized_levenshtein(shorter, longer));
    }

    let mut best = 0.0f64;
    for window in long_chars.windows(short_len) {
        let candidate: String = window.iter().collect();
        let sim = normalized_levenshtein(shorter, &candidate);
        if sim > best {
            best = sim;
        }
    }
    to_score(best)
}

fn to_score(similarity: f64) -> u8 {
    (similarity * 100.0).round() as u8
}

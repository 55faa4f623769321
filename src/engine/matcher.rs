//! Tiered fuzzy matching of tokens against the medicine vocabulary.
//!
//! Three tiers, strongest first: exact equality, substring containment
//! (tokens of 5+ characters only, so a 3-letter key cannot fire inside an
//! unrelated long word), then Levenshtein distance under a length-adaptive
//! threshold. One highest-tier match per token; ties go to the earlier
//! vocabulary entry.

use crate::config::EngineConfig;
use crate::vocabulary::VocabularyStore;

use super::types::MatchTier;

/// Best match for one token across the whole vocabulary, or `None`.
///
/// An exact hit ends the scan immediately. A substring hit keeps scanning
/// only for a possible exact hit; a fuzzy hit keeps scanning for either
/// stronger tier. The first key to reach a tier owns it.
pub fn match_token<'a>(
    token: &str,
    vocabulary: &'a VocabularyStore,
    config: &EngineConfig,
) -> Option<(&'a str, MatchTier)> {
    let token_chars = token.chars().count();
    let mut best: Option<(&'a str, MatchTier)> = None;

    for key in vocabulary.keys() {
        if token == key {
            return Some((key, MatchTier::Exact));
        }

        let best_strength = best.map_or(0, |(_, tier)| tier.strength());
        if best_strength >= MatchTier::Substring.strength() {
            continue;
        }

        if token_chars >= config.substring_min_chars && token.contains(key) {
            best = Some((key, MatchTier::Substring));
            continue;
        }

        if best_strength >= MatchTier::Fuzzy.strength() {
            continue;
        }

        let threshold = config.fuzzy_threshold(key.chars().count());
        if within_distance(token, key, threshold) {
            best = Some((key, MatchTier::Fuzzy));
        }
    }

    best
}

/// Distance check with a quick length filter: strings whose lengths differ
/// by more than the budget cannot be within it.
fn within_distance(a: &str, b: &str, limit: u32) -> bool {
    let len_diff = a.chars().count().abs_diff(b.chars().count());
    if len_diff as u32 > limit {
        return false;
    }
    edit_distance(a, b) <= limit
}

/// Levenshtein edit distance: single-character insertions, deletions and
/// substitutions at cost 1, no transposition. Single-row DP.
pub(crate) fn edit_distance(a: &str, b: &str) -> u32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len() as u32;
    }
    if b.is_empty() {
        return a.len() as u32;
    }

    let mut row: Vec<u32> = (0..=b.len() as u32).collect();
    for (i, &ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i as u32 + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            let next = (diagonal + cost).min(row[j] + 1).min(row[j + 1] + 1);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }
    row[b.len()]
}

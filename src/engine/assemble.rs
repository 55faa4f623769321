//! Deduplication of token matches into the final detection list.
//!
//! An ordered map with promotion: the first token to match a key fixes that
//! key's position in the output, and only a strictly higher tier found later
//! may overwrite the tier and matched word — in place, so output order never
//! depends on which tier won.

use std::collections::HashMap;

use crate::vocabulary::VocabularyStore;

use super::types::{Detection, TokenMatch};

/// Collapse token matches into at most one [`Detection`] per entity key,
/// in first-seen order, each resolved against the vocabulary (placeholder
/// record when the key is undocumented).
pub fn assemble(matches: Vec<TokenMatch>, vocabulary: &VocabularyStore) -> Vec<Detection> {
    let mut detections: Vec<Detection> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for m in matches {
        match index_by_key.get(&m.key) {
            Some(&i) => {
                if m.tier.strength() > detections[i].tier.strength() {
                    tracing::debug!(
                        key = %m.key,
                        from = detections[i].tier.as_str(),
                        to = m.tier.as_str(),
                        "detection promoted to stronger tier"
                    );
                    detections[i].tier = m.tier;
                    detections[i].matched_word = m.token;
                }
            }
            None => {
                index_by_key.insert(m.key.clone(), detections.len());
                detections.push(Detection {
                    info: vocabulary.resolve(&m.key),
                    key: m.key,
                    matched_word: m.token,
                    tier: m.tier,
                });
            }
        }
    }

    detections
}

//! Scan façade: wires normalization, tokenization, matching, assembly and
//! the two presentation projections (boxes, highlighted text) together.

use crate::config::EngineConfig;
use crate::vocabulary::VocabularyStore;

use super::types::{Detection, OcrWord, ScanRequest, ScanReport, TokenMatch};
use super::{assemble, geometry, highlight, matcher, normalize, tokenize};

/// Stateless per-invocation engine over an immutable vocabulary.
///
/// No scan mutates shared state, so one engine can serve arbitrarily many
/// concurrent callers by shared reference.
pub struct ScanEngine {
    vocabulary: VocabularyStore,
    config: EngineConfig,
}

impl ScanEngine {
    pub fn new(vocabulary: VocabularyStore) -> Self {
        Self::with_config(vocabulary, EngineConfig::default())
    }

    pub fn with_config(vocabulary: VocabularyStore, config: EngineConfig) -> Self {
        Self { vocabulary, config }
    }

    pub fn vocabulary(&self) -> &VocabularyStore {
        &self.vocabulary
    }

    /// Recognize medicines in raw OCR text.
    ///
    /// Empty or whitespace-only text yields an empty list, never an error.
    pub fn detect(&self, text: &str) -> Vec<Detection> {
        self.detect_cleaned(&normalize::clean_text(text))
    }

    /// Full annotation: detections, highlighted text, display boxes.
    ///
    /// Per-word text gets the same cleanup as the full text before box
    /// projection; box projection is skipped entirely when the caller sent
    /// no display dimensions.
    pub fn annotate(&self, request: &ScanRequest) -> ScanReport {
        let cleaned = normalize::clean_text(&request.text);
        let detections = self.detect_cleaned(&cleaned);
        let highlighted_text = highlight::highlight_terms(&cleaned, &detections);

        let boxes = match request.display {
            Some(display) => {
                let words: Vec<OcrWord> = request
                    .words
                    .iter()
                    .map(|w| OcrWord {
                        text: normalize::clean_text(&w.text),
                        bbox: w.bbox,
                    })
                    .collect();
                geometry::project_boxes(&words, request.natural, display, &self.config)
            }
            None => Vec::new(),
        };

        ScanReport {
            medicines: detections,
            highlighted_text,
            boxes,
        }
    }

    fn detect_cleaned(&self, cleaned: &str) -> Vec<Detection> {
        if cleaned.trim().is_empty() {
            return Vec::new();
        }

        let tokens = tokenize::tokenize(cleaned, self.config.min_token_chars);
        let mut matches = Vec::new();
        for token in tokens {
            if let Some((key, tier)) = matcher::match_token(&token, &self.vocabulary, &self.config)
            {
                tracing::debug!(
                    token = %token,
                    key,
                    tier = tier.as_str(),
                    "token matched vocabulary entry"
                );
                matches.push(TokenMatch {
                    key: key.to_string(),
                    token,
                    tier,
                });
            }
        }

        let detections = assemble::assemble(matches, &self.vocabulary);
        tracing::info!(detected = detections.len(), "medicine scan complete");
        detections
    }
}

/// Is this OCR word part of any detected medicine? Drives the distinct box
/// styling for medicine words in the overlay.
pub fn entity_word(word: &str, detections: &[Detection]) -> bool {
    if word.is_empty() {
        return false;
    }
    let lower = word.to_lowercase();
    detections.iter().any(|d| lower.contains(&d.key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{Dimensions, MatchTier, SourceBox};

    fn engine() -> ScanEngine {
        ScanEngine::new(VocabularyStore::builtin())
    }

    #[test]
    fn end_to_end_prescription_scan() {
        let detections =
            engine().detect("Take Dol0 650mg twice daily and Paracetmol if fever persists");

        assert_eq!(detections.len(), 2);
        assert_eq!(detections[0].key, "dolo");
        assert_eq!(detections[0].tier, MatchTier::Exact);
        assert_eq!(detections[1].key, "paracetamol");
        assert_eq!(detections[1].tier, MatchTier::Fuzzy);
        assert!(detections.iter().all(|d| d.info.purpose.is_some()));
    }

    #[test]
    fn empty_and_whitespace_text_detect_nothing() {
        assert!(engine().detect("").is_empty());
        assert!(engine().detect("   \n\t ").is_empty());
    }

    #[test]
    fn clean_text_without_medicines_detects_nothing() {
        let detections = engine().detect("drink plenty of water and rest well");
        assert!(detections.is_empty());
    }

    #[test]
    fn duplicate_mentions_collapse() {
        let detections = engine().detect("dolo in the morning and dolo at night");
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].key, "dolo");
    }

    #[test]
    fn annotate_produces_all_three_outputs() {
        let request = ScanRequest {
            text: "Take dolo".into(),
            words: vec![
                OcrWord {
                    text: "Take".into(),
                    bbox: Some(SourceBox { x0: 0.0, y0: 0.0, x1: 40.0, y1: 10.0 }),
                },
                OcrWord {
                    text: "dolo".into(),
                    bbox: Some(SourceBox { x0: 50.0, y0: 0.0, x1: 90.0, y1: 10.0 }),
                },
            ],
            natural: Some(Dimensions { width: 100.0, height: 100.0 }),
            display: Some(Dimensions { width: 200.0, height: 200.0 }),
        };

        let report = engine().annotate(&request);
        assert_eq!(report.medicines.len(), 1);
        assert!(report.highlighted_text.contains("<mark class=\"ocr-mark\">dolo</mark>"));
        assert_eq!(report.boxes.len(), 2);
        assert_eq!(report.boxes[1].x, 100.0);
        assert_eq!(report.boxes[1].width, 80.0);
    }

    #[test]
    fn annotate_without_display_dimensions_skips_boxes() {
        let request = ScanRequest {
            text: "dolo".into(),
            words: vec![OcrWord {
                text: "dolo".into(),
                bbox: Some(SourceBox { x0: 0.0, y0: 0.0, x1: 10.0, y1: 10.0 }),
            }],
            natural: None,
            display: None,
        };
        let report = engine().annotate(&request);
        assert!(report.boxes.is_empty());
        assert_eq!(report.medicines.len(), 1);
    }

    #[test]
    fn annotate_cleans_word_text_before_projection() {
        let request = ScanRequest {
            text: String::new(),
            words: vec![OcrWord {
                text: "Dol0".into(),
                bbox: Some(SourceBox { x0: 0.0, y0: 0.0, x1: 10.0, y1: 10.0 }),
            }],
            natural: None,
            display: Some(Dimensions { width: 50.0, height: 50.0 }),
        };
        let report = engine().annotate(&request);
        assert_eq!(report.boxes[0].text, "Dolo");
    }

    #[test]
    fn annotate_empty_request_is_all_empty() {
        let report = engine().annotate(&ScanRequest::default());
        assert!(report.medicines.is_empty());
        assert!(report.highlighted_text.is_empty());
        assert!(report.boxes.is_empty());
    }

    #[test]
    fn entity_word_detects_medicine_words() {
        let detections = engine().detect("take dolo");
        assert!(entity_word("dolo", &detections));
        assert!(entity_word("Dolo650", &detections));
        assert!(!entity_word("take", &detections));
        assert!(!entity_word("", &detections));
    }
}

use serde::{Deserialize, Serialize};

use crate::vocabulary::MedicineRecord;

/// Match quality, strongest first. A discrete tier stands in for a numeric
/// confidence score: a higher tier for the same key replaces a lower one,
/// ties keep whichever was found first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    Substring,
    Fuzzy,
}

impl MatchTier {
    /// Rank for replacement decisions; bigger wins.
    pub fn strength(self) -> u8 {
        match self {
            MatchTier::Exact => 3,
            MatchTier::Substring => 2,
            MatchTier::Fuzzy => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Substring => "substring",
            MatchTier::Fuzzy => "fuzzy",
        }
    }
}

/// One token's best vocabulary match, before deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatch {
    pub token: String,
    pub key: String,
    pub tier: MatchTier,
}

/// Word-level rectangle in source-image pixel coordinates, as reported by
/// the OCR engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// One OCR-recognized word. `bbox` is absent when the engine could not
/// localize the word; such words still participate in text matching but
/// produce no display box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrWord {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<SourceBox>,
}

/// Pixel dimensions of an image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Usable as a scale denominator.
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// One recognized medicine, at most one per key per scan.
///
/// Serializes to the `{name, info}` shape the detection endpoint has always
/// returned, plus the matched word and tier for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    #[serde(rename = "name")]
    pub key: String,
    /// The token that triggered (or upgraded) this detection.
    pub matched_word: String,
    pub tier: MatchTier,
    pub info: MedicineRecord,
}

/// Word rectangle projected into the caller's display space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayBox {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything the transport layer hands the engine for one scan.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanRequest {
    /// Full recognized text, possibly empty.
    #[serde(default)]
    pub text: String,
    /// Per-word OCR output, when the caller wants boxes or word styling.
    #[serde(default)]
    pub words: Vec<OcrWord>,
    /// Source-image dimensions as the OCR engine saw them.
    #[serde(default)]
    pub natural: Option<Dimensions>,
    /// Caller display dimensions; box projection is skipped when absent.
    #[serde(default)]
    pub display: Option<Dimensions>,
}

/// Full annotation output for one scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub medicines: Vec<Detection>,
    /// HTML-safe rendering of the normalized text with recognized terms
    /// wrapped in highlight marks.
    pub highlighted_text: String,
    pub boxes: Vec<DisplayBox>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_strength_ordering() {
        assert!(MatchTier::Exact.strength() > MatchTier::Substring.strength());
        assert!(MatchTier::Substring.strength() > MatchTier::Fuzzy.strength());
    }

    #[test]
    fn detection_serializes_key_as_name() {
        let detection = Detection {
            key: "dolo".into(),
            matched_word: "dolo".into(),
            tier: MatchTier::Exact,
            info: MedicineRecord::placeholder("dolo"),
        };
        let json = serde_json::to_string(&detection).unwrap();
        assert!(json.contains("\"name\":\"dolo\""));
        assert!(json.contains("\"tier\":\"exact\""));
    }

    #[test]
    fn degenerate_dimensions_are_invalid() {
        assert!(!Dimensions { width: 0.0, height: 100.0 }.is_valid());
        assert!(!Dimensions { width: 100.0, height: -3.0 }.is_valid());
        assert!(!Dimensions { width: f64::NAN, height: 100.0 }.is_valid());
        assert!(Dimensions { width: 640.0, height: 480.0 }.is_valid());
    }

    #[test]
    fn scan_request_tolerates_sparse_json() {
        let request: ScanRequest = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(request.text, "hello");
        assert!(request.words.is_empty());
        assert!(request.display.is_none());
    }
}

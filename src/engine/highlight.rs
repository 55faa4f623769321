//! HTML-safe highlighting of recognized terms in extracted text.
//!
//! The text is escaped exactly once, up front; term substitution afterwards
//! only ever inserts the marker around already-escaped spans, so wrapped
//! content is never re-escaped. Terms are applied in detection order and the
//! first term to claim a span keeps it.

use regex::Regex;

use super::types::Detection;

const MARK_OPEN: &str = "<mark class=\"ocr-mark\">";
const MARK_CLOSE: &str = "</mark>";

/// Escape the five HTML-sensitive characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render `text` HTML-safe with every whole-word occurrence of each detected
/// entity key wrapped in a highlight mark, preserving the occurrence's own
/// casing. Empty text or no detections degrade to plain escaped text.
pub fn highlight_terms(text: &str, detections: &[Detection]) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut html = escape_html(text);
    for detection in detections {
        let term = escape_html(&detection.key);
        if term.is_empty() {
            continue;
        }
        let pattern = format!(r"(?i)\b{}\b", regex::escape(&term));
        let Ok(re) = Regex::new(&pattern) else {
            continue;
        };
        html = re
            .replace_all(&html, format!("{MARK_OPEN}$0{MARK_CLOSE}"))
            .into_owned();
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::MatchTier;
    use crate::vocabulary::MedicineRecord;

    fn detection(key: &str) -> Detection {
        Detection {
            key: key.into(),
            matched_word: key.into(),
            tier: MatchTier::Exact,
            info: MedicineRecord::placeholder(key),
        }
    }

    #[test]
    fn escapes_all_sensitive_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'b'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#039;b&#039;&lt;/a&gt;"
        );
    }

    #[test]
    fn wraps_whole_word_occurrences() {
        let html = highlight_terms("take dolo at night", &[detection("dolo")]);
        assert_eq!(
            html,
            "take <mark class=\"ocr-mark\">dolo</mark> at night"
        );
    }

    #[test]
    fn matching_is_case_insensitive_and_preserves_case() {
        let html = highlight_terms("Dolo after food", &[detection("dolo")]);
        assert_eq!(html, "<mark class=\"ocr-mark\">Dolo</mark> after food");
    }

    #[test]
    fn respects_word_boundaries() {
        // "vitaminc" must not light up for the term "vitamin".
        let html = highlight_terms("vitaminc daily", &[detection("vitamin")]);
        assert!(!html.contains(MARK_OPEN));
    }

    #[test]
    fn script_tags_are_neutralized() {
        let html = highlight_terms(
            "<script>alert(1)</script> take dolo",
            &[detection("dolo")],
        );
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("<mark class=\"ocr-mark\">dolo</mark>"));
    }

    #[test]
    fn multiple_terms_all_wrapped() {
        let html = highlight_terms(
            "dolo then paracetamol",
            &[detection("dolo"), detection("paracetamol")],
        );
        assert!(html.contains("<mark class=\"ocr-mark\">dolo</mark>"));
        assert!(html.contains("<mark class=\"ocr-mark\">paracetamol</mark>"));
    }

    #[test]
    fn repeated_occurrences_all_wrapped() {
        let html = highlight_terms("dolo morning, dolo night", &[detection("dolo")]);
        assert_eq!(html.matches(MARK_OPEN).count(), 2);
    }

    #[test]
    fn empty_inputs_degrade_quietly() {
        assert_eq!(highlight_terms("", &[detection("dolo")]), "");
        assert_eq!(highlight_terms("no meds here", &[]), "no meds here");
    }
}

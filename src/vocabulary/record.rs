use serde::{Deserialize, Serialize};

/// Reference information for one canonical medicine.
///
/// Loaded once at startup and never mutated. Absent fields are omitted from
/// serialized output so callers only see what the table actually documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineRecord {
    /// Lowercase canonical identifier, unique within the store.
    pub key: String,
    /// Human-facing name, brand spelling included.
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_effects: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contraindications: Option<String>,
}

impl MedicineRecord {
    /// Fallback record for a recognized key with no registered reference
    /// entry. Presentation always has something displayable; the defaults
    /// defer to a professional rather than inventing guidance.
    pub fn placeholder(key: &str) -> Self {
        Self {
            key: key.to_string(),
            display_name: key.to_string(),
            purpose: Some("Information not available".to_string()),
            dosage: Some("Consult your doctor".to_string()),
            instructions: Some("Take as prescribed".to_string()),
            side_effects: Some("Consult your doctor".to_string()),
            contraindications: Some("Consult your doctor".to_string()),
        }
    }
}

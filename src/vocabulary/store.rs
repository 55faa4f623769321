use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::builtin::{builtin_records, MEDICINE_KEYS};
use super::record::MedicineRecord;
use super::VocabularyError;

/// On-disk vocabulary format: the canonical key list plus reference records
/// for whichever keys are documented.
#[derive(Debug, Deserialize)]
struct VocabularyFile {
    keys: Vec<String>,
    #[serde(default)]
    records: Vec<MedicineRecord>,
}

/// Immutable medicine vocabulary.
///
/// Built once at startup and shared read-only by every scan; `keys` keeps
/// the scan order stable so matcher tie-breaking stays deterministic, while
/// `records` gives O(1) reference lookup.
#[derive(Debug, Clone)]
pub struct VocabularyStore {
    keys: Vec<String>,
    records: HashMap<String, MedicineRecord>,
}

impl VocabularyStore {
    /// Assemble a store from a key list and reference records.
    ///
    /// Keys are lowercased and must be non-empty and unique. A record whose
    /// key is missing from the key list extends the list at the end.
    pub fn from_parts(
        keys: Vec<String>,
        records: Vec<MedicineRecord>,
    ) -> Result<Self, VocabularyError> {
        let mut ordered = Vec::with_capacity(keys.len());
        let mut seen = std::collections::HashSet::new();

        for key in keys {
            let key = key.trim().to_lowercase();
            if key.is_empty() {
                return Err(VocabularyError::EmptyKey);
            }
            if !seen.insert(key.clone()) {
                return Err(VocabularyError::DuplicateKey(key));
            }
            ordered.push(key);
        }

        let mut by_key = HashMap::with_capacity(records.len());
        for mut record in records {
            record.key = record.key.trim().to_lowercase();
            if record.key.is_empty() {
                return Err(VocabularyError::EmptyKey);
            }
            if seen.insert(record.key.clone()) {
                ordered.push(record.key.clone());
            }
            by_key.insert(record.key.clone(), record);
        }

        if ordered.is_empty() {
            return Err(VocabularyError::NoKeys);
        }

        Ok(Self {
            keys: ordered,
            records: by_key,
        })
    }

    /// The built-in medicine table.
    pub fn builtin() -> Self {
        let keys = MEDICINE_KEYS.iter().map(|k| k.to_string()).collect();
        Self::from_parts(keys, builtin_records()).expect("builtin vocabulary is valid")
    }

    /// Load a vocabulary from a JSON file.
    pub fn load(path: &Path) -> Result<Self, VocabularyError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            VocabularyError::FileLoad(path.display().to_string(), e.to_string())
        })?;
        let file: VocabularyFile = serde_json::from_str(&json)
            .map_err(|e| VocabularyError::FileParse(e.to_string()))?;

        let store = Self::from_parts(file.keys, file.records)?;
        tracing::info!(
            keys = store.len(),
            records = store.records.len(),
            path = %path.display(),
            "vocabulary loaded from file"
        );
        Ok(store)
    }

    /// Reference record for an exact key, if documented.
    pub fn lookup(&self, key: &str) -> Option<&MedicineRecord> {
        self.records.get(key)
    }

    /// Reference record for a key, falling back to the placeholder so a
    /// recognized-but-undocumented term still has displayable info.
    pub fn resolve(&self, key: &str) -> MedicineRecord {
        match self.lookup(key) {
            Some(record) => record.clone(),
            None => MedicineRecord::placeholder(key),
        }
    }

    /// Canonical keys in stable scan order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

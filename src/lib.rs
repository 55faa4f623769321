//! Rxlens recognizes medicine names in noisy OCR output from photographed
//! prescriptions and annotates them for on-screen display.
//!
//! The engine is a pure, synchronous pipeline: OCR artifact cleanup, word
//! tokenization, tiered fuzzy matching against an immutable medicine
//! vocabulary, then two independent presentation projections — display-space
//! bounding boxes for the image overlay and an HTML-safe highlighted
//! rendering of the extracted text. I/O, OCR itself and transport belong to
//! the caller.
//!
//! ```
//! use rxlens::{ScanEngine, VocabularyStore};
//!
//! let engine = ScanEngine::new(VocabularyStore::builtin());
//! let detections = engine.detect("Take Dol0 650mg twice daily");
//! assert_eq!(detections[0].key, "dolo");
//! ```

pub mod config;
pub mod engine;
pub mod vocabulary;

pub use config::EngineConfig;
pub use engine::{
    entity_word, Detection, Dimensions, DisplayBox, MatchTier, OcrWord, ScanEngine, ScanReport,
    ScanRequest, SourceBox,
};
pub use vocabulary::{MedicineRecord, VocabularyError, VocabularyStore};

use tracing_subscriber::EnvFilter;

/// Initialize tracing once at process start. Honors RUST_LOG, falling back
/// to the crate default filter; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}

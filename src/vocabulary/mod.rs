mod builtin;

pub mod record;
pub mod store;

pub use record::MedicineRecord;
pub use store::VocabularyStore;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("Vocabulary file load failed: {0}: {1}")]
    FileLoad(String, String),

    #[error("Vocabulary file parse failed: {0}")]
    FileParse(String),

    #[error("Vocabulary key is empty")]
    EmptyKey,

    #[error("Duplicate vocabulary key: {0}")]
    DuplicateKey(String),

    #[error("Vocabulary contains no keys")]
    NoKeys,
}

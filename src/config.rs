use serde::Serialize;

/// Application-level constants
pub const APP_NAME: &str = "Rxlens";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Tunable parameters for the recognition engine.
///
/// The defaults reproduce the strict detection policy: tokens shorter than
/// 3 characters are noise, substring containment only counts for tokens of
/// 5+ characters, and the fuzzy threshold tightens to 1 edit for short keys.
#[derive(Debug, Clone, Serialize)]
pub struct EngineConfig {
    /// Minimum token length kept by the tokenizer.
    pub min_token_chars: usize,
    /// Minimum token length for the substring-containment tier.
    pub substring_min_chars: usize,
    /// Keys at or below this length use the tighter fuzzy threshold.
    pub short_key_max_chars: usize,
    /// Maximum edit distance for keys of `short_key_max_chars` or fewer.
    pub fuzzy_distance_short: u32,
    /// Maximum edit distance for longer keys.
    pub fuzzy_distance_long: u32,
    /// Smallest width/height a projected display box may have.
    pub min_box_extent: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_token_chars: 3,
            substring_min_chars: 5,
            short_key_max_chars: 5,
            fuzzy_distance_short: 1,
            fuzzy_distance_long: 2,
            min_box_extent: 2.0,
        }
    }
}

impl EngineConfig {
    /// Length-adaptive edit-distance budget for a vocabulary key.
    pub fn fuzzy_threshold(&self, key_chars: usize) -> u32 {
        if key_chars <= self.short_key_max_chars {
            self.fuzzy_distance_short
        } else {
            self.fuzzy_distance_long
        }
    }
}

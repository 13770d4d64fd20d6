use serde::{Deserialize, Serialize};

/// Generic kanji-to-kana converter used when the dictionary path is unavailable
///
/// Implementations are opaque oracles: they only return candidate readings,
/// never reading types.
pub trait Transliterator: Send + Sync {
    /// Short identifier for logs ("table", ...)
    fn name(&self) -> &str;

    /// Candidate hiragana readings for a single character, empty if unknown
    fn readings(&self, character: &str) -> Vec<String>;
}

/// Which algorithm a classification runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingSource {
    /// Authoritative dictionary lookup
    Dictionary,
    /// Heuristic over transliterator output (lower confidence)
    Transliteration,
}

impl ReadingSource {
    pub fn from_use_dictionary(use_dictionary: bool) -> Self {
        if use_dictionary {
            ReadingSource::Dictionary
        } else {
            ReadingSource::Transliteration
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingSource::Dictionary => "dictionary",
            ReadingSource::Transliteration => "transliteration",
        }
    }
}

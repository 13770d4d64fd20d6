use serde::{Deserialize, Serialize};

use crate::types::KanjiEntry;

/// Read-only kanji lookup over a loaded dictionary
pub trait Dictionary: Send + Sync {
    /// Entry by exact grapheme match
    fn entry(&self, literal: &str) -> Option<&KanjiEntry>;

    /// All entries in source order
    fn entries(&self) -> &[KanjiEntry];

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryMetadata {
    pub name: String,
    pub database_version: Option<String>,
    pub date_of_creation: Option<String>,
    pub entry_count: usize,
    /// Records dropped during load (no literal, duplicate literal)
    pub skipped_records: usize,
}

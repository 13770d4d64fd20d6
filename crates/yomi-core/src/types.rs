use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reading category attached to a kanji in the dictionary source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingKind {
    On,
    Kun,
    Nanori,
}

impl ReadingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingKind::On => "on",
            ReadingKind::Kun => "kun",
            ReadingKind::Nanori => "nanori",
        }
    }
}

impl fmt::Display for ReadingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one (character, reading) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    On,
    Kun,
    Nanori,
    /// Character is known, reading is not attested for it
    Unknown,
    /// Character (or, on the transliteration path, the reading) was not found
    NotFound,
}

impl Classification {
    /// The reading kind, when the outcome is one
    pub fn kind(&self) -> Option<ReadingKind> {
        match self {
            Classification::On => Some(ReadingKind::On),
            Classification::Kun => Some(ReadingKind::Kun),
            Classification::Nanori => Some(ReadingKind::Nanori),
            Classification::Unknown | Classification::NotFound => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::On => "on",
            Classification::Kun => "kun",
            Classification::Nanori => "nanori",
            Classification::Unknown => "unknown",
            Classification::NotFound => "not_found",
        }
    }
}

impl From<ReadingKind> for Classification {
    fn from(kind: ReadingKind) -> Self {
        match kind {
            ReadingKind::On => Classification::On,
            ReadingKind::Kun => Classification::Kun,
            ReadingKind::Nanori => Classification::Nanori,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frequency rank of a kanji (lower = more common)
///
/// `Unranked` sorts after every ranked value. Serialized as an optional integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum Frequency {
    Ranked(u32),
    Unranked,
}

impl Frequency {
    pub fn rank(&self) -> Option<u32> {
        match self {
            Frequency::Ranked(rank) => Some(*rank),
            Frequency::Unranked => None,
        }
    }
}

impl Ord for Frequency {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Frequency::Ranked(a), Frequency::Ranked(b)) => a.cmp(b),
            (Frequency::Ranked(_), Frequency::Unranked) => Ordering::Less,
            (Frequency::Unranked, Frequency::Ranked(_)) => Ordering::Greater,
            (Frequency::Unranked, Frequency::Unranked) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Frequency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Option<u32>> for Frequency {
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(rank) if rank >= 1 => Frequency::Ranked(rank),
            _ => Frequency::Unranked,
        }
    }
}

impl From<Frequency> for Option<u32> {
    fn from(value: Frequency) -> Self {
        value.rank()
    }
}

/// One typed reading of a kanji
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Canonical hiragana form (root only for kun-readings)
    pub text: String,
    pub kind: ReadingKind,
    /// Raw source spellings that collapsed into `text`, e.g. `い.きる`, `い.かす`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
}

impl Reading {
    pub fn new(text: impl Into<String>, kind: ReadingKind) -> Self {
        Self {
            text: text.into(),
            kind,
            variants: Vec::new(),
        }
    }

    /// True if `query` equals the canonical text or one of the raw spellings
    pub fn matches(&self, query: &str) -> bool {
        self.text == query || self.variants.iter().any(|v| v == query)
    }
}

/// A kanji record from the dictionary source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiEntry {
    pub literal: String,
    pub frequency: Frequency,
    /// School grade; present for Jōyō kanji
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<u8>,
    pub readings: Vec<Reading>,
}

impl KanjiEntry {
    pub fn new(literal: impl Into<String>, frequency: Frequency) -> Self {
        Self {
            literal: literal.into(),
            frequency,
            grade: None,
            readings: Vec::new(),
        }
    }

    /// Add a reading, merging it into an existing (text, kind) pair if present.
    ///
    /// Empty canonical text is dropped.
    pub fn add_reading(&mut self, text: String, kind: ReadingKind, raw: &str) {
        if text.is_empty() {
            return;
        }

        let idx = match self
            .readings
            .iter()
            .position(|r| r.kind == kind && r.text == text)
        {
            Some(idx) => idx,
            None => {
                self.readings.push(Reading::new(text, kind));
                self.readings.len() - 1
            }
        };

        let reading = &mut self.readings[idx];
        if raw != reading.text && !reading.variants.iter().any(|v| v == raw) {
            reading.variants.push(raw.to_string());
        }
    }

    pub fn readings_of(&self, kind: ReadingKind) -> impl Iterator<Item = &Reading> {
        self.readings.iter().filter(move |r| r.kind == kind)
    }

    pub fn is_joyo(&self) -> bool {
        self.grade.is_some()
    }
}

/// One member of a homophone group
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HomophoneMember {
    #[serde(rename = "kanji")]
    pub character: String,
    #[serde(rename = "type")]
    pub kind: ReadingKind,
}

/// Kanji sharing one canonical pronunciation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomophoneGroup {
    pub reading: String,
    #[serde(rename = "kanji")]
    pub members: Vec<HomophoneMember>,
}

impl HomophoneGroup {
    pub fn characters(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.character.as_str())
    }

    pub fn contains(&self, character: &str, kind: ReadingKind) -> bool {
        self.members
            .iter()
            .any(|m| m.character == character && m.kind == kind)
    }
}

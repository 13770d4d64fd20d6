use std::collections::HashMap;
use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use yomi_core::dictionary::{Dictionary, DictionaryMetadata};
use yomi_core::error::LoadError;
use yomi_core::types::{Frequency, KanjiEntry, ReadingKind};

use crate::frequency;
use crate::kana::{self, Script};

/// KANJIDIC2 kanji dictionary, read-only once built
#[derive(Debug, Clone, Default)]
pub struct Kanjidic {
    entries: Vec<KanjiEntry>,
    literal_index: HashMap<String, usize>,
    database_version: Option<String>,
    date_of_creation: Option<String>,
    skipped: usize,
}

impl Kanjidic {
    fn new() -> Self {
        Self::default()
    }

    /// Parse KANJIDIC2 XML from a string
    pub fn from_xml_str(xml: &str) -> Result<Self, LoadError> {
        Self::from_reader(xml.as_bytes())
    }

    /// Parse KANJIDIC2 XML from any buffered reader
    pub fn from_reader<R: BufRead>(source: R) -> Result<Self, LoadError> {
        let mut reader = Reader::from_reader(source);
        reader.config_mut().trim_text(true);

        let mut dict = Self::new();
        let mut buf = Vec::new();
        let mut seen_root = false;
        let mut record: Option<RecordBuilder> = None;
        let mut field: Option<Field> = None;
        let mut text = String::new();

        loop {
            let event = reader.read_event_into(&mut buf).map_err(|e| {
                LoadError::ParseError(format!(
                    "XML error at byte {}: {}",
                    reader.buffer_position(),
                    e
                ))
            })?;

            match event {
                Event::Start(e) => {
                    let name = e.local_name();
                    match name.as_ref() {
                        b"kanjidic2" => seen_root = true,
                        b"character" => record = Some(RecordBuilder::default()),
                        _ => {
                            field = Field::from_start(&e, record.is_some());
                            text.clear();
                        }
                    }
                }
                Event::Text(t) => {
                    if field.is_some() {
                        match t.unescape() {
                            Ok(value) => text.push_str(&value),
                            Err(e) => {
                                tracing::warn!("Undecodable text in kanjidic record: {}", e);
                                if let Some(record) = record.as_mut() {
                                    record.malformed = true;
                                }
                            }
                        }
                    }
                }
                Event::End(e) => {
                    let name = e.local_name();
                    if name.as_ref() == b"character" {
                        if let Some(builder) = record.take() {
                            match builder.finish() {
                                Some(entry) => dict.insert(entry),
                                None => dict.skipped += 1,
                            }
                        }
                    } else if let Some(current) = field.take() {
                        dict.apply(current, &text, record.as_mut());
                        text.clear();
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !seen_root {
            return Err(LoadError::InvalidFormat(
                "missing <kanjidic2> root element".to_string(),
            ));
        }

        if dict.skipped > 0 {
            tracing::warn!("Skipped {} malformed kanjidic records", dict.skipped);
        }

        Ok(dict)
    }

    fn apply(&mut self, field: Field, text: &str, record: Option<&mut RecordBuilder>) {
        match (field, record) {
            (Field::DatabaseVersion, None) => self.database_version = Some(text.to_string()),
            (Field::DateOfCreation, None) => self.date_of_creation = Some(text.to_string()),
            (field, Some(record)) => record.apply(field, text),
            _ => {}
        }
    }

    fn insert(&mut self, entry: KanjiEntry) {
        if self.literal_index.contains_key(&entry.literal) {
            tracing::warn!("Duplicate kanjidic record for {}, keeping the first", entry.literal);
            self.skipped += 1;
            return;
        }
        self.literal_index
            .insert(entry.literal.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Jōyō kanji (entries carrying a school grade), source order
    pub fn joyo(&self) -> impl Iterator<Item = &KanjiEntry> {
        self.entries.iter().filter(|e| e.is_joyo())
    }

    /// All entries sorted by frequency, unranked last
    pub fn ranked(&self) -> Vec<&KanjiEntry> {
        frequency::rank(&self.entries)
    }
}

impl Dictionary for Kanjidic {
    fn entry(&self, literal: &str) -> Option<&KanjiEntry> {
        self.literal_index
            .get(literal)
            .and_then(|&idx| self.entries.get(idx))
    }

    fn entries(&self) -> &[KanjiEntry] {
        &self.entries
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "KANJIDIC2".to_string(),
            database_version: self.database_version.clone(),
            date_of_creation: self.date_of_creation.clone(),
            entry_count: self.entries.len(),
            skipped_records: self.skipped,
        }
    }
}

/// Element whose text content we keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Literal,
    Frequency,
    Grade,
    Reading(ReadingKind),
    Nanori,
    DatabaseVersion,
    DateOfCreation,
}

impl Field {
    fn from_start(e: &BytesStart<'_>, in_record: bool) -> Option<Self> {
        let name = e.local_name();
        match (name.as_ref(), in_record) {
            (b"literal", true) => Some(Field::Literal),
            (b"freq", true) => Some(Field::Frequency),
            (b"grade", true) => Some(Field::Grade),
            (b"nanori", true) => Some(Field::Nanori),
            (b"reading", true) => reading_kind(e).map(Field::Reading),
            (b"database_version", false) => Some(Field::DatabaseVersion),
            (b"date_of_creation", false) => Some(Field::DateOfCreation),
            _ => None,
        }
    }
}

/// `ja_on` / `ja_kun`; pinyin, korean and vietnamese readings are ignored
fn reading_kind(e: &BytesStart<'_>) -> Option<ReadingKind> {
    let attr = e.try_get_attribute("r_type").ok().flatten()?;
    match attr.value.as_ref() {
        b"ja_on" => Some(ReadingKind::On),
        b"ja_kun" => Some(ReadingKind::Kun),
        _ => None,
    }
}

#[derive(Debug, Default)]
struct RecordBuilder {
    literal: Option<String>,
    frequency: Option<u32>,
    grade: Option<u8>,
    readings: Vec<(ReadingKind, String)>,
    malformed: bool,
}

impl RecordBuilder {
    fn apply(&mut self, field: Field, text: &str) {
        match field {
            Field::Literal => {
                if !text.is_empty() {
                    self.literal = Some(text.to_string());
                }
            }
            Field::Frequency => match text.parse() {
                Ok(rank) => self.frequency = Some(rank),
                Err(_) => tracing::debug!("Unparsable freq {:?}, treating as unranked", text),
            },
            Field::Grade => self.grade = text.parse().ok(),
            Field::Reading(kind) => self.readings.push((kind, text.to_string())),
            Field::Nanori => self.readings.push((ReadingKind::Nanori, text.to_string())),
            Field::DatabaseVersion | Field::DateOfCreation => {}
        }
    }

    fn finish(self) -> Option<KanjiEntry> {
        let Some(literal) = self.literal else {
            tracing::warn!("Skipping kanjidic record without a literal");
            return None;
        };

        if self.malformed {
            tracing::warn!("Skipping malformed kanjidic record {}", literal);
            return None;
        }

        let mut entry = KanjiEntry::new(literal, Frequency::from(self.frequency));
        entry.grade = self.grade;

        for (kind, raw) in self.readings {
            let script = match kind {
                ReadingKind::On => Script::Katakana,
                ReadingKind::Kun | ReadingKind::Nanori => Script::Hiragana,
            };
            entry.add_reading(kana::to_canonical(&raw, script), kind, &raw);
        }

        Some(entry)
    }
}

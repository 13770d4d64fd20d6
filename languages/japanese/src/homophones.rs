use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use yomi_core::language::Transliterator;
use yomi_core::types::{HomophoneGroup, HomophoneMember, KanjiEntry, ReadingKind};

use crate::classifier;
use crate::kana::{self, Script};

/// Reading → kanji index, groups ordered by reading
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HomophoneIndex {
    groups: Vec<HomophoneGroup>,
}

impl HomophoneIndex {
    /// Invert the readings of `entries` into homophone groups
    pub fn build<'a>(entries: impl IntoIterator<Item = &'a KanjiEntry>) -> Self {
        let mut builder = IndexBuilder::default();

        for entry in entries {
            for reading in &entry.readings {
                builder.add(&reading.text, &entry.literal, reading.kind);
            }
        }

        builder.finish()
    }

    /// Index built without a dictionary: readings come from the transliterator
    /// and are typed with the transliteration heuristic.
    pub fn build_with_transliterator<'a>(
        characters: impl IntoIterator<Item = &'a str>,
        transliterator: &dyn Transliterator,
    ) -> Self {
        let mut builder = IndexBuilder::default();

        for character in characters {
            for reading in transliterator.readings(character) {
                let reading = kana::to_hiragana(&reading);
                let kind = classifier::guess_kind(&reading);
                builder.add(&reading, character, kind);
            }
        }

        tracing::debug!(
            "Built {} homophone groups from {} transliterator",
            builder.groups.len(),
            transliterator.name()
        );
        builder.finish()
    }

    /// Group for `reading`; katakana or okurigana-marked input is canonicalised first
    pub fn find(&self, reading: &str) -> Option<&HomophoneGroup> {
        let key = kana::to_canonical(reading, Script::Hiragana);
        self.groups
            .binary_search_by(|g| g.reading.as_str().cmp(key.as_str()))
            .ok()
            .map(|idx| &self.groups[idx])
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups with more than one distinct kanji
    pub fn shared(&self) -> impl Iterator<Item = &HomophoneGroup> {
        self.groups
            .iter()
            .filter(|g| g.characters().collect::<BTreeSet<_>>().len() > 1)
    }
}

#[derive(Default)]
struct IndexBuilder {
    groups: BTreeMap<String, BTreeSet<HomophoneMember>>,
}

impl IndexBuilder {
    fn add(&mut self, reading: &str, character: &str, kind: ReadingKind) {
        if reading.is_empty() {
            return;
        }
        self.groups
            .entry(reading.to_string())
            .or_default()
            .insert(HomophoneMember {
                character: character.to_string(),
                kind,
            });
    }

    fn finish(self) -> HomophoneIndex {
        let groups = self
            .groups
            .into_iter()
            .map(|(reading, members)| HomophoneGroup {
                reading,
                members: members.into_iter().collect(),
            })
            .collect();

        HomophoneIndex { groups }
    }
}

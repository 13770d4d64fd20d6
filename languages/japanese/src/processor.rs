use std::path::Path;

use yomi_config::Config;
use yomi_config::fallback::FallbackConfig;
use yomi_config::tiers::TierConfig;
use yomi_core::dictionary::Dictionary;
use yomi_core::error::ClassifyError;
use yomi_core::language::{ReadingSource, Transliterator};
use yomi_core::types::{Classification, KanjiEntry};

use crate::classifier::{BatchPolicy, BatchRecord, ReadingClassifier};
use crate::frequency;
use crate::homophones::HomophoneIndex;
use crate::kanjidic::Kanjidic;
use crate::loader::KanjidicLoader;
use crate::tiers::{self, TierList};
use crate::tokenizer::VibratoTransliterator;
use crate::transliterator::{LayeredTransliterator, TableTransliterator};

/// Kanji reading processor: loaded dictionary plus transliteration fallback
pub struct KanjiProcessor {
    dictionary: Option<Kanjidic>,
    transliterator: Box<dyn Transliterator>,
    tiers: Vec<TierConfig>,
    fallback_on_not_found: bool,
}

impl KanjiProcessor {
    pub fn new(
        dictionary: Option<Kanjidic>,
        transliterator: Box<dyn Transliterator>,
        tiers: Vec<TierConfig>,
    ) -> Self {
        Self {
            dictionary,
            transliterator,
            tiers,
            fallback_on_not_found: false,
        }
    }

    /// Build from configuration. A dictionary that fails to load is logged
    /// and left out; classification then needs the transliteration path.
    pub fn from_config(config: &Config) -> Self {
        let dictionary = if config.dictionary.enabled {
            match KanjidicLoader::load_from_file(Path::new(&config.dictionary.path)) {
                Ok(dict) => Some(dict),
                Err(e) => {
                    tracing::error!("Failed to load kanjidic: {}", e);
                    tracing::warn!(
                        "Continuing without dictionary, only the transliteration path is available"
                    );
                    None
                }
            }
        } else {
            tracing::warn!("Dictionary disabled, using transliteration only");
            None
        };

        Self {
            dictionary,
            transliterator: transliterator_from_config(&config.fallback),
            tiers: config.tiers.clone(),
            fallback_on_not_found: config.fallback.on_not_found,
        }
    }

    pub fn dictionary(&self) -> Option<&Kanjidic> {
        self.dictionary.as_ref()
    }

    pub fn transliterator(&self) -> &dyn Transliterator {
        self.transliterator.as_ref()
    }

    pub fn classifier(&self) -> ReadingClassifier<'_> {
        let dictionary = self.dictionary.as_ref().map(|d| d as &dyn Dictionary);
        ReadingClassifier::new(dictionary, self.transliterator.as_ref())
    }

    pub fn classify(
        &self,
        character: &str,
        reading: &str,
        source: ReadingSource,
    ) -> Result<Classification, ClassifyError> {
        self.classifier().classify(character, reading, source)
    }

    pub fn classify_batch<I, C, R>(&self, pairs: I, source: ReadingSource) -> Vec<BatchRecord>
    where
        I: IntoIterator<Item = (C, R)>,
        C: AsRef<str>,
        R: AsRef<str>,
    {
        let policy = BatchPolicy {
            source,
            fallback_on_not_found: self.fallback_on_not_found,
        };
        self.classifier().classify_batch(pairs, policy)
    }

    /// Dictionary entries by frequency; empty without a dictionary
    pub fn ranked(&self) -> Vec<&KanjiEntry> {
        self.dictionary
            .as_ref()
            .map(|d| d.ranked())
            .unwrap_or_default()
    }

    /// Every configured tier as plain data, optionally over Jōyō kanji only
    pub fn tier_lists(&self, joyo_only: bool) -> Vec<TierList> {
        let ranked = match &self.dictionary {
            Some(dictionary) if joyo_only => frequency::rank(dictionary.joyo()),
            Some(dictionary) => dictionary.ranked(),
            None => Vec::new(),
        };

        tiers::build_tiers(&ranked, &self.tiers)
            .iter()
            .map(|t| t.to_list())
            .collect()
    }

    /// Name of the smallest configured tier holding `character`
    pub fn tier_of(&self, character: &str) -> Option<String> {
        let ranked = self.ranked();
        let tiers = tiers::build_tiers(&ranked, &self.tiers);
        tiers::tier_of(&tiers, character.trim()).map(|t| t.name.clone())
    }

    /// Homophone index over one tier, or over the whole dictionary.
    ///
    /// `None` when there is no dictionary or the tier name is not configured.
    pub fn homophones(&self, tier: Option<&str>) -> Option<HomophoneIndex> {
        let dictionary = self.dictionary.as_ref()?;

        match tier {
            None => Some(HomophoneIndex::build(dictionary.entries())),
            Some(name) => {
                let ranked = dictionary.ranked();
                let tiers = tiers::build_tiers(&ranked, &self.tiers);
                let tier = tiers::find_tier(&tiers, name)?;
                Some(HomophoneIndex::build(tier.entries.iter().copied()))
            }
        }
    }

    /// Homophone index for a given set of characters through the transliterator
    pub fn homophones_without_dictionary<'a>(
        &self,
        characters: impl IntoIterator<Item = &'a str>,
    ) -> HomophoneIndex {
        HomophoneIndex::build_with_transliterator(characters, self.transliterator.as_ref())
    }
}

/// Reading table overrides first, then the vibrato dictionary.
///
/// Without a tokenizer dictionary the embedded common-kanji table answers,
/// extended by the configured table if any.
fn transliterator_from_config(config: &FallbackConfig) -> Box<dyn Transliterator> {
    let table = config
        .table_path
        .as_ref()
        .and_then(|path| match TableTransliterator::load_from_file(Path::new(path)) {
            Ok(table) => Some(table),
            Err(e) => {
                tracing::warn!("Failed to load transliteration table from {}: {}", path, e);
                None
            }
        });

    let tokenizer = config.tokenizer_dictionary.as_ref().and_then(|path| {
        match VibratoTransliterator::load_from_file(Path::new(path), config.tokenizer_layout) {
            Ok(tokenizer) => Some(tokenizer),
            Err(e) => {
                tracing::warn!("Failed to load vibrato dictionary: {}", e);
                None
            }
        }
    });

    let mut layers: Vec<Box<dyn Transliterator>> = Vec::new();
    if let Some(table) = table {
        layers.push(Box::new(table));
    }
    match tokenizer {
        Some(tokenizer) => layers.push(Box::new(tokenizer)),
        None => {
            tracing::warn!("No tokenizer dictionary, transliteration covers common kanji only");
            layers.push(Box::new(TableTransliterator::with_defaults()));
        }
    }

    if layers.len() == 1 {
        layers.remove(0)
    } else {
        Box::new(LayeredTransliterator::new(layers))
    }
}

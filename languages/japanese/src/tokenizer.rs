use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use vibrato::{Dictionary, Tokenizer};
use yomi_config::fallback::TokenizerLayout;
use yomi_core::error::LoadError;
use yomi_core::language::Transliterator;

use crate::kana;

/// Marks an empty feature column in MeCab-style dictionaries
const EMPTY_FEATURE: &str = "*";

/// Transliterator backed by a vibrato morphological dictionary.
///
/// The character is tokenized on its own and the kana column of each token
/// is joined, giving the reading the dictionary would pick for the character
/// as a standalone word.
pub struct VibratoTransliterator {
    tokenizer: Tokenizer,
    layout: TokenizerLayout,
}

impl VibratoTransliterator {
    pub fn new(dictionary: Dictionary, layout: TokenizerLayout) -> Self {
        Self {
            tokenizer: Tokenizer::new(dictionary),
            layout,
        }
    }

    /// Read a compiled dictionary; `.zst` files are decompressed on the fly
    pub fn load_from_file(path: &Path, layout: TokenizerLayout) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|e| {
            LoadError::SourceUnavailable(format!("{}: {}", path.display(), e))
        })?;

        let compressed = path.extension().is_some_and(|ext| ext == "zst");
        let reader: Box<dyn Read> = if compressed {
            Box::new(zstd::Decoder::new(file)?)
        } else {
            Box::new(BufReader::new(file))
        };

        let dictionary = Dictionary::read(reader)
            .map_err(|e| LoadError::InvalidFormat(format!("{}: {}", path.display(), e)))?;

        tracing::info!(
            "Loaded vibrato dictionary from {} ({:?} layout)",
            path.display(),
            layout
        );
        Ok(Self::new(dictionary, layout))
    }
}

/// Kana reading column of a feature string, `None` when the column is absent
pub fn feature_reading(feature: &str, layout: TokenizerLayout) -> Option<&str> {
    let column = match layout {
        TokenizerLayout::Unidic => 20,
        TokenizerLayout::Ipadic => 7,
    };

    feature
        .split(',')
        .nth(column)
        .map(str::trim)
        .filter(|r| !r.is_empty() && *r != EMPTY_FEATURE)
}

impl Transliterator for VibratoTransliterator {
    fn name(&self) -> &str {
        "vibrato"
    }

    fn readings(&self, character: &str) -> Vec<String> {
        if character.is_empty() {
            return Vec::new();
        }

        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(character);
        worker.tokenize();

        let mut reading = String::new();
        for token in worker.token_iter() {
            match feature_reading(token.feature(), self.layout) {
                Some(kana) => reading.push_str(kana),
                None => {
                    tracing::debug!("No reading for {} in the vibrato dictionary", token.surface());
                    return Vec::new();
                }
            }
        }

        let reading = kana::to_hiragana(&reading);
        if kana::is_all_hiragana(&reading) {
            vec![reading]
        } else {
            Vec::new()
        }
    }
}

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::bail;
use yomi_config::Config;
use yomi_core::error::ClassifyError;
use yomi_core::language::ReadingSource;
use yomi_lang_japanese::KanjiProcessor;

use crate::io::{read_pairs, write_json};

pub fn handle_classify(
    processor: &KanjiProcessor,
    kanji: &str,
    reading: &str,
    use_dictionary: bool,
) -> anyhow::Result<()> {
    let source = ReadingSource::from_use_dictionary(use_dictionary);

    match processor.classify(kanji, reading, source) {
        Ok(classification) => {
            let tier = processor.tier_of(kanji).unwrap_or_else(|| "-".to_string());
            println!(
                "{}\t{}\t{}\t{}\t{}",
                kanji,
                reading,
                classification,
                source.as_str(),
                tier
            );
            Ok(())
        }
        Err(ClassifyError::SourceUnavailable) => {
            bail!(
                "Dictionary unavailable; rerun with --no-dictionary to use the transliteration \
                 heuristic"
            )
        }
    }
}

pub fn handle_classify_batch(
    processor: &KanjiProcessor,
    config: &Config,
    input: &Path,
    use_dictionary: bool,
) -> anyhow::Result<()> {
    let pairs = read_pairs(input)?;
    let source = ReadingSource::from_use_dictionary(use_dictionary);
    let records = processor.classify_batch(pairs, source);

    let mut summary: BTreeMap<&str, usize> = BTreeMap::new();
    for record in &records {
        *summary.entry(record.classification.as_str()).or_insert(0) += 1;
    }
    for (classification, count) in &summary {
        tracing::info!("{}: {}", classification, count);
    }

    write_json(&config.output.file("classifications.json"), &records, config.output.pretty)
}

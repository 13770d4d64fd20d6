use std::path::Path;

use anyhow::{anyhow, bail};
use yomi_config::Config;
use yomi_lang_japanese::corpus::distinct_kanji;
use yomi_lang_japanese::{HomophoneIndex, KanjiProcessor};

use crate::io::{read_words, write_json};

pub fn handle_homophones(
    processor: &KanjiProcessor,
    config: &Config,
    tier: Option<&str>,
    reading: Option<&str>,
    input: Option<&Path>,
) -> anyhow::Result<()> {
    let index = build_index(processor, tier, input)?;

    tracing::info!(
        "{} readings, {} shared by more than one kanji",
        index.len(),
        index.shared().count()
    );

    if let Some(reading) = reading {
        match index.find(reading) {
            Some(group) => {
                let members: Vec<String> = group
                    .members
                    .iter()
                    .map(|m| format!("{}({})", m.character, m.kind))
                    .collect();
                println!("{}\t{}", group.reading, members.join(" "));
            }
            None => println!("{}\t-", reading),
        }
        return Ok(());
    }

    let file = match tier {
        Some(name) => format!("homophones_{}.json", name),
        None => "homophones.json".to_string(),
    };
    write_json(&config.output.file(&file), &index, config.output.pretty)
}

fn build_index(
    processor: &KanjiProcessor,
    tier: Option<&str>,
    input: Option<&Path>,
) -> anyhow::Result<HomophoneIndex> {
    if processor.dictionary().is_some() {
        return processor
            .homophones(tier)
            .ok_or_else(|| anyhow!("Unknown tier {}", tier.unwrap_or_default()));
    }

    let Some(input) = input else {
        bail!(
            "No dictionary loaded; pass --input with a word list to index through the \
             transliterator"
        );
    };

    if tier.is_some() {
        tracing::warn!("Tiers need the dictionary, indexing every kanji of {}", input.display());
    }

    let words = read_words(input)?;
    let characters = distinct_kanji(words.iter().map(String::as_str));
    tracing::warn!(
        "Indexing {} kanji with the {} transliterator (lower confidence)",
        characters.len(),
        processor.transliterator().name()
    );

    Ok(processor.homophones_without_dictionary(characters.iter().map(String::as_str)))
}

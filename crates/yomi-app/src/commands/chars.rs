use std::path::Path;

use yomi_lang_japanese::corpus::{count_characters, is_only_kanji};

use crate::io::read_words;

pub fn handle_chars(input: &Path, kanji_only: bool, top: usize) -> anyhow::Result<()> {
    let words = read_words(input)?;
    let words: Vec<&str> = words
        .iter()
        .map(String::as_str)
        .filter(|w| !kanji_only || is_only_kanji(w))
        .collect();

    tracing::info!("Counting characters of {} words", words.len());

    for (c, count) in count_characters(words).into_iter().take(top) {
        println!("{}\t{}", c, count);
    }

    Ok(())
}

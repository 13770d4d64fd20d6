use wana_kana::{ConvertJapanese, IsJapaneseStr};

/// Separates a kun-reading root from its okurigana (`おこな.う`)
pub const OKURIGANA_DELIMITER: char = '.';

/// Marks prefix/suffix readings (`-び`, `ひ-`)
pub const AFFIX_MARKER: char = '-';

/// Script a raw reading arrives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// On-readings
    Katakana,
    /// Kun-readings and nanori
    Hiragana,
}

/// Canonical hiragana form of a raw dictionary reading.
///
/// Katakana readings are converted to hiragana. Hiragana readings are reduced
/// to the root before the okurigana delimiter. Affix markers are trimmed from
/// both. Non-kana input comes back unchanged apart from the trimming.
pub fn to_canonical(text: &str, script: Script) -> String {
    let text = match script {
        Script::Katakana => text,
        Script::Hiragana => root(text),
    };

    to_hiragana(trim_affix(text))
}

/// Leading segment before the okurigana delimiter
pub fn root(text: &str) -> &str {
    match text.split_once(OKURIGANA_DELIMITER) {
        Some((root, _)) => root,
        None => text,
    }
}

pub fn trim_affix(text: &str) -> &str {
    text.trim_matches(AFFIX_MARKER)
}

/// Katakana → hiragana for kana-only input, anything else is returned as-is
pub fn to_hiragana(text: &str) -> String {
    if !text.is_empty() && text.is_kana() {
        text.to_hiragana()
    } else {
        text.to_string()
    }
}

/// Normalize a user-supplied reading for comparison with stored readings.
///
/// Only the script is changed; delimiters are kept so full okurigana
/// spellings still compare against the raw variants.
pub fn normalize_query(reading: &str) -> String {
    if reading.is_empty() {
        return String::new();
    }

    match reading.split_once(OKURIGANA_DELIMITER) {
        Some((head, tail)) => format!(
            "{}{}{}",
            to_hiragana(head),
            OKURIGANA_DELIMITER,
            to_hiragana(tail)
        ),
        None => to_hiragana(reading),
    }
}

/// Every character is plain hiragana
pub fn is_all_hiragana(text: &str) -> bool {
    !text.is_empty() && text.is_hiragana()
}

use std::collections::HashMap;

/// Count every character of a word list, most frequent first.
///
/// Ties keep the order in which characters first appear.
pub fn count_characters<'a>(words: impl IntoIterator<Item = &'a str>) -> Vec<(char, usize)> {
    let mut order: Vec<char> = Vec::new();
    let mut counts: HashMap<char, usize> = HashMap::new();

    for word in words {
        for c in word.chars() {
            let count = counts.entry(c).or_insert(0);
            if *count == 0 {
                order.push(c);
            }
            *count += 1;
        }
    }

    let mut result: Vec<(char, usize)> = order
        .into_iter()
        .map(|c| (c, counts.get(&c).copied().unwrap_or(0)))
        .collect();
    result.sort_by(|a, b| b.1.cmp(&a.1));
    result
}

/// CJK ideograph (unified, extension A, compatibility)
pub fn is_kanji(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{F900}'..='\u{FAFF}')
}

/// Text made only of kanji, CJK punctuation, full-width forms and whitespace
pub fn is_only_kanji(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(|c| {
            is_kanji(c)
                || matches!(c, '\u{3000}'..='\u{303F}' | '\u{FF00}'..='\u{FFEF}')
                || c.is_whitespace()
        })
}

/// Distinct kanji of a word list, most frequent first
pub fn distinct_kanji<'a>(words: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    count_characters(words)
        .into_iter()
        .filter(|(c, _)| is_kanji(*c))
        .map(|(c, _)| c.to_string())
        .collect()
}

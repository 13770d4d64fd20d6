use yomi_core::types::KanjiEntry;

/// Sort entries by frequency rank (lower = more common).
///
/// Unranked entries go last; ties keep their source order.
pub fn rank<'a>(entries: impl IntoIterator<Item = &'a KanjiEntry>) -> Vec<&'a KanjiEntry> {
    let mut ranked: Vec<&KanjiEntry> = entries.into_iter().collect();
    // sort_by_key is stable
    ranked.sort_by_key(|e| e.frequency);
    ranked
}

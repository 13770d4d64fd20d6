use serde::Serialize;
use yomi_core::dictionary::Dictionary;
use yomi_core::error::ClassifyError;
use yomi_core::language::{ReadingSource, Transliterator};
use yomi_core::preprocess::{DefaultPreprocessor, Preprocessor};
use yomi_core::types::{Classification, ReadingKind};

use crate::kana;

/// Longest reading the transliteration heuristic still calls an on-reading
pub const MAX_GUESSED_ON_LENGTH: usize = 2;

/// Decides the reading type of (character, reading) pairs.
///
/// The dictionary is optional: without one, only the transliteration path
/// can answer and the dictionary path reports `SourceUnavailable`.
pub struct ReadingClassifier<'a> {
    dictionary: Option<&'a dyn Dictionary>,
    transliterator: &'a dyn Transliterator,
}

/// How a batch run picks its path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPolicy {
    pub source: ReadingSource,
    /// Retry dictionary `NotFound` results once through the transliterator
    pub fallback_on_not_found: bool,
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self {
            source: ReadingSource::Dictionary,
            fallback_on_not_found: false,
        }
    }
}

/// Result for one input pair of a batch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRecord {
    pub character: String,
    pub reading: String,
    pub classification: Classification,
    /// Path that produced `classification`
    pub source: ReadingSource,
}

impl<'a> ReadingClassifier<'a> {
    pub fn new(
        dictionary: Option<&'a dyn Dictionary>,
        transliterator: &'a dyn Transliterator,
    ) -> Self {
        Self {
            dictionary,
            transliterator,
        }
    }

    /// Classify one pair on the requested path.
    ///
    /// Empty input is `NotFound` without consulting any source. The dictionary
    /// path never switches to the transliterator on its own.
    pub fn classify(
        &self,
        character: &str,
        reading: &str,
        source: ReadingSource,
    ) -> Result<Classification, ClassifyError> {
        match prepare(character, reading) {
            Some((character, reading)) => self.classify_prepared(character, &reading, source),
            None => Ok(Classification::NotFound),
        }
    }

    fn classify_prepared(
        &self,
        character: &str,
        reading: &str,
        source: ReadingSource,
    ) -> Result<Classification, ClassifyError> {
        match source {
            ReadingSource::Dictionary => {
                let dictionary = self.dictionary.ok_or(ClassifyError::SourceUnavailable)?;
                Ok(classify_with_dictionary(dictionary, character, reading))
            }
            ReadingSource::Transliteration => Ok(classify_with_transliterator(
                self.transliterator,
                character,
                reading,
            )),
        }
    }

    /// Classify every pair; each input gets exactly one record.
    ///
    /// Without a dictionary the whole batch runs on the transliteration path,
    /// reported once.
    pub fn classify_batch<I, C, R>(&self, pairs: I, policy: BatchPolicy) -> Vec<BatchRecord>
    where
        I: IntoIterator<Item = (C, R)>,
        C: AsRef<str>,
        R: AsRef<str>,
    {
        let mut source = policy.source;
        if source == ReadingSource::Dictionary && self.dictionary.is_none() {
            tracing::warn!(
                "Dictionary unavailable, classifying batch with the {} transliterator \
                 (lower confidence)",
                self.transliterator.name()
            );
            source = ReadingSource::Transliteration;
        }

        let mut records = Vec::new();
        let mut retried = 0usize;

        for (character, reading) in pairs {
            let (character, reading) = (character.as_ref(), reading.as_ref());

            let mut record = BatchRecord {
                character: character.to_string(),
                reading: reading.to_string(),
                classification: Classification::NotFound,
                source,
            };

            if let Some((prepared, query)) = prepare(character, reading) {
                match self.classify_prepared(prepared, &query, source) {
                    Ok(Classification::NotFound)
                        if source == ReadingSource::Dictionary && policy.fallback_on_not_found =>
                    {
                        retried += 1;
                        record.source = ReadingSource::Transliteration;
                        record.classification =
                            classify_with_transliterator(self.transliterator, prepared, &query);
                    }
                    Ok(classification) => record.classification = classification,
                    Err(e) => {
                        tracing::warn!("Failed to classify {} / {}: {}", character, reading, e);
                    }
                }
            }

            tracing::debug!(
                "{} / {} -> {} ({})",
                record.character,
                record.reading,
                record.classification,
                record.source.as_str()
            );
            records.push(record);
        }

        if retried > 0 {
            tracing::info!(
                "{} pairs missing from the dictionary went through the transliterator",
                retried
            );
        }

        records
    }
}

/// Trimmed character and preprocessed reading, `None` if either is empty.
///
/// The character keeps its exact code points so compatibility ideographs
/// still match their own dictionary literal.
fn prepare<'c>(character: &'c str, reading: &str) -> Option<(&'c str, String)> {
    let character = character.trim();
    let reading = DefaultPreprocessor.process(reading);

    if character.is_empty() || reading.is_empty() {
        None
    } else {
        Some((character, reading))
    }
}

/// Dictionary path: on, then kun, then nanori; `Unknown` if the character
/// is known but the reading is not attested for it.
pub fn classify_with_dictionary(
    dictionary: &dyn Dictionary,
    character: &str,
    reading: &str,
) -> Classification {
    let Some(entry) = dictionary.entry(character) else {
        return Classification::NotFound;
    };

    let query = kana::normalize_query(reading);

    for kind in [ReadingKind::On, ReadingKind::Kun, ReadingKind::Nanori] {
        if entry.readings_of(kind).any(|r| r.matches(&query)) {
            return kind.into();
        }
    }

    Classification::Unknown
}

/// Transliteration path. Approximate: only ever answers `On`, `Kun` or `NotFound`.
pub fn classify_with_transliterator(
    transliterator: &dyn Transliterator,
    character: &str,
    reading: &str,
) -> Classification {
    let query = kana::to_hiragana(reading);

    transliterator
        .readings(character)
        .iter()
        .map(|candidate| kana::to_hiragana(candidate))
        .find(|candidate| *candidate == query)
        .map(|candidate| guess_kind(&candidate).into())
        .unwrap_or(Classification::NotFound)
}

/// Short all-hiragana readings are guessed as on-readings, everything else as kun.
///
/// Unverified against the real on/kun distribution; lower confidence than
/// any dictionary answer.
pub fn guess_kind(reading: &str) -> ReadingKind {
    if reading.chars().count() <= MAX_GUESSED_ON_LENGTH && kana::is_all_hiragana(reading) {
        ReadingKind::On
    } else {
        ReadingKind::Kun
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::kanjidic::Kanjidic;
    use crate::kanjidic::tests::SAMPLE;
    use crate::transliterator::TableTransliterator;

    /// Counts calls so tests can tell whether the oracle was consulted
    struct CountingTransliterator {
        inner: TableTransliterator,
        calls: AtomicUsize,
    }

    impl CountingTransliterator {
        fn new() -> Self {
            Self {
                inner: TableTransliterator::from_tsv("𠀀\tあ\n日\tにち,ひ\n漢\tかんじ\n"),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Transliterator for CountingTransliterator {
        fn name(&self) -> &str {
            "counting"
        }

        fn readings(&self, character: &str) -> Vec<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.readings(character)
        }
    }

    fn classify(dict: &Kanjidic, character: &str, reading: &str) -> Classification {
        let table = TableTransliterator::new();
        ReadingClassifier::new(Some(dict), &table)
            .classify(character, reading, ReadingSource::Dictionary)
            .unwrap()
    }

    #[test]
    fn test_on_kun_unknown() {
        let dict = Kanjidic::from_xml_str(SAMPLE).unwrap();
        assert_eq!(classify(&dict, "日", "にち"), Classification::On);
        assert_eq!(classify(&dict, "日", "ひ"), Classification::Kun);
        assert_eq!(classify(&dict, "日", "ぞ"), Classification::Unknown);
        assert_eq!(classify(&dict, "非", "ひ"), Classification::On);
    }

    #[test]
    fn test_kun_root_and_full_form() {
        let dict = Kanjidic::from_xml_str(SAMPLE).unwrap();
        assert_eq!(classify(&dict, "行", "おこな"), Classification::Kun);
        assert_eq!(classify(&dict, "行", "おこな.う"), Classification::Kun);
        assert_eq!(classify(&dict, "行", "い"), Classification::Kun);
        assert_eq!(classify(&dict, "生", "い.かす"), Classification::Kun);
        assert_eq!(classify(&dict, "生", "い.かない"), Classification::Unknown);
    }

    #[test]
    fn test_affixed_and_katakana_queries() {
        let dict = Kanjidic::from_xml_str(SAMPLE).unwrap();
        assert_eq!(classify(&dict, "日", "び"), Classification::Kun);
        assert_eq!(classify(&dict, "日", "-び"), Classification::Kun);
        assert_eq!(classify(&dict, "日", "ジツ"), Classification::On);
        assert_eq!(classify(&dict, "日", "ﾆﾁ"), Classification::On);
    }

    #[test]
    fn test_nanori() {
        let dict = Kanjidic::from_xml_str(SAMPLE).unwrap();
        assert_eq!(classify(&dict, "日", "はる"), Classification::Nanori);
        assert_eq!(classify(&dict, "生", "いく"), Classification::Nanori);
    }

    #[test]
    fn test_on_never_reported_as_kun() {
        let dict = Kanjidic::from_xml_str(SAMPLE).unwrap();
        for entry in dict.entries() {
            for reading in entry.readings_of(ReadingKind::On) {
                assert_eq!(classify(&dict, &entry.literal, &reading.text), Classification::On);
            }
        }
    }

    #[test]
    fn test_missing_character_and_fallback() {
        let dict = Kanjidic::from_xml_str(SAMPLE).unwrap();
        let oracle = CountingTransliterator::new();
        let classifier = ReadingClassifier::new(Some(&dict), &oracle);

        assert_eq!(
            classifier.classify("𠀀", "あ", ReadingSource::Dictionary),
            Ok(Classification::NotFound)
        );
        assert_eq!(oracle.calls(), 0);

        assert_eq!(
            classifier.classify("𠀀", "あ", ReadingSource::Transliteration),
            Ok(Classification::On)
        );
        assert_eq!(oracle.calls(), 1);
    }

    #[test]
    fn test_empty_input_touches_nothing() {
        let oracle = CountingTransliterator::new();
        let classifier = ReadingClassifier::new(None, &oracle);

        for source in [ReadingSource::Dictionary, ReadingSource::Transliteration] {
            assert_eq!(classifier.classify("", "あ", source), Ok(Classification::NotFound));
            assert_eq!(classifier.classify("日", "  ", source), Ok(Classification::NotFound));
        }
        assert_eq!(oracle.calls(), 0);
    }

    #[test]
    fn test_dictionary_path_without_dictionary() {
        let oracle = CountingTransliterator::new();
        let classifier = ReadingClassifier::new(None, &oracle);

        assert_eq!(
            classifier.classify("日", "にち", ReadingSource::Dictionary),
            Err(ClassifyError::SourceUnavailable)
        );
        assert_eq!(oracle.calls(), 0);
    }

    #[test]
    fn test_heuristic() {
        let oracle = CountingTransliterator::new();
        assert_eq!(classify_with_transliterator(&oracle, "日", "にち"), Classification::On);
        assert_eq!(classify_with_transliterator(&oracle, "漢", "かんじ"), Classification::Kun);
        assert_eq!(classify_with_transliterator(&oracle, "日", "ぞ"), Classification::NotFound);

        assert_eq!(guess_kind("ひ"), ReadingKind::On);
        assert_eq!(guess_kind("ひと"), ReadingKind::On);
        assert_eq!(guess_kind("ひとつ"), ReadingKind::Kun);
        assert_eq!(guess_kind("ヒ"), ReadingKind::Kun);
    }

    #[test]
    fn test_batch_reports_every_pair() {
        let dict = Kanjidic::from_xml_str(SAMPLE).unwrap();
        let oracle = CountingTransliterator::new();
        let classifier = ReadingClassifier::new(Some(&dict), &oracle);

        let pairs = [("日", "にち"), ("", ""), ("𠀀", "あ"), ("日", "ぞ")];
        let records = classifier.classify_batch(pairs, BatchPolicy::default());

        let outcomes: Vec<Classification> = records.iter().map(|r| r.classification).collect();
        assert_eq!(
            outcomes,
            vec![
                Classification::On,
                Classification::NotFound,
                Classification::NotFound,
                Classification::Unknown
            ]
        );
        assert!(records.iter().all(|r| r.source == ReadingSource::Dictionary));
        assert_eq!(oracle.calls(), 0);
    }

    #[test]
    fn test_batch_fallback_on_not_found() {
        let dict = Kanjidic::from_xml_str(SAMPLE).unwrap();
        let oracle = CountingTransliterator::new();
        let classifier = ReadingClassifier::new(Some(&dict), &oracle);

        let policy = BatchPolicy {
            source: ReadingSource::Dictionary,
            fallback_on_not_found: true,
        };
        let records = classifier.classify_batch(vec![("𠀀", "あ"), ("日", "ぞ")], policy);

        assert_eq!(records[0].classification, Classification::On);
        assert_eq!(records[0].source, ReadingSource::Transliteration);
        // Unknown is terminal, no retry
        assert_eq!(records[1].classification, Classification::Unknown);
        assert_eq!(records[1].source, ReadingSource::Dictionary);
        assert_eq!(oracle.calls(), 1);
    }

    #[test]
    fn test_empty_pair_is_not_retried() {
        let dict = Kanjidic::from_xml_str(SAMPLE).unwrap();
        let oracle = CountingTransliterator::new();
        let classifier = ReadingClassifier::new(Some(&dict), &oracle);

        let policy = BatchPolicy {
            source: ReadingSource::Dictionary,
            fallback_on_not_found: true,
        };
        let records = classifier.classify_batch([("", ""), (" ", "あ")], policy);

        for record in &records {
            assert_eq!(record.classification, Classification::NotFound);
            assert_eq!(record.source, ReadingSource::Dictionary);
        }
        assert_eq!(oracle.calls(), 0);
    }

    #[test]
    fn test_compatibility_ideograph_matched_exactly() {
        let xml = "<kanjidic2>\
<character><literal>\u{FA10}</literal><reading_meaning><rmgroup>\
<reading r_type=\"ja_kun\">つか</reading></rmgroup></reading_meaning></character>\
<character><literal>\u{585A}</literal><reading_meaning><rmgroup>\
<reading r_type=\"ja_on\">チョウ</reading></rmgroup></reading_meaning></character>\
</kanjidic2>";
        let dict = Kanjidic::from_xml_str(xml).unwrap();

        assert_eq!(classify(&dict, "\u{FA10}", "つか"), Classification::Kun);
        assert_eq!(classify(&dict, " \u{FA10} ", "つか"), Classification::Kun);
        assert_eq!(classify(&dict, "\u{FA10}", "ちょう"), Classification::Unknown);
        assert_eq!(classify(&dict, "\u{585A}", "つか"), Classification::Unknown);
    }

    #[test]
    fn test_batch_without_dictionary_degrades() {
        let oracle = CountingTransliterator::new();
        let classifier = ReadingClassifier::new(None, &oracle);

        let records =
            classifier.classify_batch([("日", "ひ"), ("日", "にち")], BatchPolicy::default());
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.source == ReadingSource::Transliteration));
        assert_eq!(records[1].classification, Classification::On);
    }
}

use yomi_config::tiers::{TierConfig, default_tiers};
use yomi_core::dictionary::Dictionary;
use yomi_core::language::ReadingSource;
use yomi_core::types::{Classification, ReadingKind};

use crate::homophones::HomophoneIndex;
use crate::kanjidic::Kanjidic;
use crate::processor::KanjiProcessor;
use crate::transliterator::TableTransliterator;

fn character(literal: &str, freq: Option<u32>, on: &[&str], kun: &[&str]) -> String {
    let mut xml = format!("<character>\n<literal>{literal}</literal>\n<misc>");
    if let Some(freq) = freq {
        xml.push_str(&format!("<freq>{freq}</freq>"));
    }
    xml.push_str("</misc>\n<reading_meaning>\n<rmgroup>\n");
    for r in on {
        xml.push_str(&format!("<reading r_type=\"ja_on\">{r}</reading>\n"));
    }
    for r in kun {
        xml.push_str(&format!("<reading r_type=\"ja_kun\">{r}</reading>\n"));
    }
    xml.push_str("</rmgroup>\n</reading_meaning>\n</character>\n");
    xml
}

fn fixture() -> String {
    let records = [
        character("一", Some(2), &["イチ", "イツ"], &["ひと-", "ひと.つ"]),
        character("日", Some(1), &["ニチ", "ジツ"], &["ひ", "-び", "-か"]),
        character("人", Some(5), &["ジン", "ニン"], &["ひと", "-り", "-と"]),
        character("山", Some(131), &["サン", "セン"], &["やま"]),
        character("見", Some(22), &["ケン"], &["み.る", "み.える", "み.せる"]),
        character("店", Some(383), &["テン"], &["みせ", "たな"]),
        character("道", Some(155), &["ドウ", "トウ"], &["みち"]),
        character("換", Some(1093), &["カン"], &["か.える", "-か.える", "か.わる"]),
        character("生", Some(29), &["セイ", "ショウ"], &["い.きる", "い.かす", "う.まれる", "なま"]),
        character("漢", Some(1487), &["カン"], &[]),
        character("行", Some(20), &["コウ", "ギョウ", "アン"], &["い.く", "ゆ.く", "-ゆ.き", "おこな.う"]),
        character("議", Some(69), &["ギ"], &[]),
        character("国", Some(3), &["コク"], &["くに"]),
        character("水", Some(223), &["スイ"], &["みず", "みず-"]),
        character("読", Some(618), &["ドク", "トク", "トウ"], &["よ.む", "-よ.み"]),
        character("長", Some(12), &["チョウ"], &["なが.い", "おさ"]),
        character("重", Some(171), &["ジュウ", "チョウ"], &["え", "おも.い", "かさ.ねる"]),
        character("非", Some(320), &["ヒ"], &["あら.ず"]),
        character("丂", None, &["コウ", "キョウ"], &[]),
    ];
    format!(
        "<kanjidic2>\n<header><database_version>test</database_version></header>\n{}</kanjidic2>\n",
        records.concat()
    )
}

fn processor_with(tiers: Vec<TierConfig>) -> KanjiProcessor {
    let dict = Kanjidic::from_xml_str(&fixture()).unwrap();
    KanjiProcessor::new(
        Some(dict),
        Box::new(TableTransliterator::with_defaults()),
        tiers,
    )
}

fn processor() -> KanjiProcessor {
    processor_with(default_tiers())
}

#[test]
fn test_reading_types_across_levels() {
    let processor = processor();
    let cases = [
        ("一", "いち", Classification::On),
        ("日", "にち", Classification::On),
        ("日", "ひ", Classification::Kun),
        ("人", "じん", Classification::On),
        ("人", "ひと", Classification::Kun),
        ("山", "さん", Classification::On),
        ("山", "やま", Classification::Kun),
        ("見", "けん", Classification::On),
        ("見", "み", Classification::Kun),
        ("店", "てん", Classification::On),
        ("店", "みせ", Classification::Kun),
        ("道", "どう", Classification::On),
        ("道", "みち", Classification::Kun),
        ("換", "かん", Classification::On),
        ("換", "かえ", Classification::Unknown),
        ("換", "か", Classification::Kun),
        ("生", "せい", Classification::On),
        ("生", "い", Classification::Kun),
        ("漢", "かん", Classification::On),
        ("漢", "はん", Classification::Unknown),
        ("行", "こう", Classification::On),
        ("行", "い", Classification::Kun),
        ("行", "おこな", Classification::Kun),
        ("議", "ぎ", Classification::On),
        ("国", "こく", Classification::On),
        ("国", "くに", Classification::Kun),
        ("水", "すい", Classification::On),
        ("水", "みず", Classification::Kun),
        ("読", "どく", Classification::On),
        ("読", "よ", Classification::Kun),
        ("長", "ちょう", Classification::On),
        ("長", "なが", Classification::Kun),
        ("重", "じゅう", Classification::On),
        ("重", "おも", Classification::Kun),
        ("漢", "xyz", Classification::Unknown),
        ("非", "ひ", Classification::On),
    ];

    let pairs = cases.iter().map(|(c, r, _)| (*c, *r));
    let records = processor.classify_batch(pairs, ReadingSource::Dictionary);
    assert_eq!(records.len(), cases.len());

    for (record, (character, reading, expected)) in records.iter().zip(cases) {
        assert_eq!(
            record.classification, expected,
            "{character} / {reading}"
        );
    }
}

#[test]
fn test_missing_character_can_fall_back() {
    let processor = processor();
    assert_eq!(
        processor.classify("𠀀", "あ", ReadingSource::Dictionary),
        Ok(Classification::NotFound)
    );
    // Default table has no entry either
    assert_eq!(
        processor.classify("𠀀", "あ", ReadingSource::Transliteration),
        Ok(Classification::NotFound)
    );
}

#[test]
fn test_shared_kun_root_group() {
    let processor = processor();
    let index = processor.homophones(None).unwrap();
    let group = index.find("い").unwrap();

    assert!(group.contains("生", ReadingKind::Kun));
    assert!(group.contains("行", ReadingKind::Kun));
}

#[test]
fn test_on_and_kun_share_a_group() {
    let processor = processor();
    let index = processor.homophones(None).unwrap();

    let hi = index.find("ひ").unwrap();
    assert!(hi.contains("日", ReadingKind::Kun));
    assert!(hi.contains("非", ReadingKind::On));

    let kan = index.find("かん").unwrap();
    assert_eq!(kan.characters().collect::<Vec<_>>(), vec!["換", "漢"]);
}

#[test]
fn test_empty_input_not_found() {
    let processor = processor();
    for source in [ReadingSource::Dictionary, ReadingSource::Transliteration] {
        assert_eq!(processor.classify("", "ひ", source), Ok(Classification::NotFound));
        assert_eq!(processor.classify("日", "", source), Ok(Classification::NotFound));
    }
}

#[test]
fn test_idempotent_load() {
    let xml = fixture();
    let first = Kanjidic::from_xml_str(&xml).unwrap();
    let second = Kanjidic::from_xml_str(&xml).unwrap();
    assert_eq!(first.entries(), second.entries());
    assert_eq!(first.metadata(), second.metadata());
}

#[test]
fn test_tiers_and_indices_are_consistent() {
    let processor = processor_with(vec![
        TierConfig::new("N5", 5),
        TierConfig::new("N4", 10),
        TierConfig::new("N1", 50),
    ]);

    let lists = processor.tier_lists(false);
    assert_eq!(lists[0].kanji, vec!["日", "一", "国", "人", "長"]);
    assert_eq!(lists[2].count, 19);
    assert_eq!(lists[2].kanji.last().map(String::as_str), Some("丂"));

    for pair in lists.windows(2) {
        assert_eq!(pair[1].kanji[..pair[0].count], pair[0].kanji[..]);
    }

    // Every reading of every tier kanji shows up exactly once in the tier index
    let dict = processor.dictionary().unwrap();
    let index = processor.homophones(Some("N4")).unwrap();
    for literal in &lists[1].kanji {
        let entry = dict.entry(literal).unwrap();
        for reading in &entry.readings {
            let group = index.find(&reading.text).unwrap();
            let hits = group
                .members
                .iter()
                .filter(|m| m.character == *literal && m.kind == reading.kind)
                .count();
            assert_eq!(hits, 1);
        }
    }

    let reference = HomophoneIndex::build(
        lists[1]
            .kanji
            .iter()
            .filter_map(|k| dict.entry(k)),
    );
    assert_eq!(index, reference);
}

use std::collections::HashMap;
use std::path::Path;

use yomi_core::language::Transliterator;

use crate::kana;

/// Table-backed kanji → kana transliterator
pub struct TableTransliterator {
    readings: HashMap<String, Vec<String>>,
}

impl TableTransliterator {
    /// Create empty table
    pub fn new() -> Self {
        Self {
            readings: HashMap::new(),
        }
    }

    /// Create with readings for common kanji
    pub fn with_defaults() -> Self {
        // Most common standalone reading first
        let common = [
            ("一", "いち,ひと"),
            ("二", "に,ふた"),
            ("三", "さん,みっ"),
            ("日", "にち,ひ"),
            ("月", "げつ,つき"),
            ("人", "じん,ひと"),
            ("山", "さん,やま"),
            ("川", "かわ,せん"),
            ("水", "すい,みず"),
            ("火", "か,ひ"),
            ("木", "き,もく"),
            ("金", "きん,かね"),
            ("土", "ど,つち"),
            ("見", "けん,み"),
            ("店", "てん,みせ"),
            ("道", "どう,みち"),
            ("国", "こく,くに"),
            ("読", "どく,よ"),
            ("長", "ちょう,なが"),
            ("重", "じゅう,おも"),
            ("生", "せい,い"),
            ("行", "こう,い,おこな"),
            ("換", "かん,かえ"),
            ("漢", "かん"),
            ("議", "ぎ"),
            ("非", "ひ"),
            ("本", "ほん,もと"),
            ("学", "がく,まな"),
            ("大", "だい,おお"),
            ("小", "しょう,ちい"),
            ("中", "ちゅう,なか"),
            ("上", "じょう,うえ"),
            ("下", "か,した"),
            ("年", "ねん,とし"),
            ("時", "じ,とき"),
            ("先", "せん,さき"),
            ("気", "き"),
            ("語", "ご"),
        ];

        let mut readings = HashMap::new();
        for (kanji, list) in common {
            readings.insert(kanji.to_string(), split_readings(list));
        }

        Self { readings }
    }

    /// Parse `kanji<TAB>reading[,reading...]` lines; malformed lines are skipped
    pub fn from_tsv(content: &str) -> Self {
        let mut readings: HashMap<String, Vec<String>> = HashMap::new();

        for line in content.lines() {
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() >= 2 && !parts[0].trim().is_empty() {
                let list = split_readings(parts[1]);
                if !list.is_empty() {
                    readings
                        .entry(parts[0].trim().to_string())
                        .or_default()
                        .extend(list);
                }
            }
        }

        Self { readings }
    }

    /// Load reading table from TSV file
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_tsv(&content);
        tracing::info!(
            "Loaded {} transliteration entries from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl Default for TableTransliterator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn split_readings(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(kana::to_hiragana)
        .collect()
}

impl Transliterator for TableTransliterator {
    fn name(&self) -> &str {
        "table"
    }

    fn readings(&self, character: &str) -> Vec<String> {
        self.readings.get(character).cloned().unwrap_or_default()
    }
}

/// Asks each transliterator in turn; the first non-empty answer wins
pub struct LayeredTransliterator {
    layers: Vec<Box<dyn Transliterator>>,
}

impl LayeredTransliterator {
    pub fn new(layers: Vec<Box<dyn Transliterator>>) -> Self {
        Self { layers }
    }
}

impl Transliterator for LayeredTransliterator {
    fn name(&self) -> &str {
        "layered"
    }

    fn readings(&self, character: &str) -> Vec<String> {
        self.layers
            .iter()
            .map(|layer| layer.readings(character))
            .find(|readings| !readings.is_empty())
            .unwrap_or_default()
    }
}

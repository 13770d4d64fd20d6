use serde::{Deserialize, Serialize};

fn default_on_not_found() -> bool {
    false
}

/// Column layout of the morphological dictionary's feature strings
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerLayout {
    #[default]
    Unidic,
    Ipadic,
}

impl std::str::FromStr for TokenizerLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unidic" => Ok(TokenizerLayout::Unidic),
            "ipadic" => Ok(TokenizerLayout::Ipadic),
            other => Err(format!("unknown tokenizer layout {}", other)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct FallbackConfig {
    /// TSV reading table; its entries take precedence over the tokenizer
    #[serde(default)]
    pub table_path: Option<String>,
    /// Compiled vibrato dictionary (`system.dic` or `system.dic.zst`)
    #[serde(default)]
    pub tokenizer_dictionary: Option<String>,
    #[serde(default)]
    pub tokenizer_layout: TokenizerLayout,
    /// Retry dictionary misses through the transliterator in batch runs
    #[serde(default = "default_on_not_found")]
    pub on_not_found: bool,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            table_path: None,
            tokenizer_dictionary: None,
            tokenizer_layout: TokenizerLayout::default(),
            on_not_found: default_on_not_found(),
        }
    }
}

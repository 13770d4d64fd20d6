use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_path() -> String {
    "data/kanjidic2.xml".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// When false, every run goes through the transliteration path
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// KANJIDIC2 XML file
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: default_path(),
        }
    }
}

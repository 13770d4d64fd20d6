use serde::{Deserialize, Serialize};

/// One proficiency tier: the first `count` kanji by frequency
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TierConfig {
    pub name: String,
    pub count: usize,
}

impl TierConfig {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// JLPT kanji counts, easiest first
pub fn default_tiers() -> Vec<TierConfig> {
    vec![
        TierConfig::new("N5", 100),
        TierConfig::new("N4", 300),
        TierConfig::new("N3", 650),
        TierConfig::new("N2", 1000),
        TierConfig::new("N1", 2000),
    ]
}

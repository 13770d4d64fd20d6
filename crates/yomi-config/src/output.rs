use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    "output".to_string()
}

fn default_pretty() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(default = "default_dir")]
    pub dir: String,
    /// Indent JSON artifacts
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl OutputConfig {
    pub fn file(&self, name: &str) -> PathBuf {
        PathBuf::from(&self.dir).join(name)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            pretty: default_pretty(),
        }
    }
}

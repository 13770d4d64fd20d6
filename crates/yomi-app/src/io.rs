use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

/// Read `kanji<TAB>reading` pairs. Every non-blank line yields a pair, a
/// missing reading column becomes an empty reading.
pub fn read_pairs(path: &Path) -> anyhow::Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read pairs from {}", path.display()))?;
    Ok(parse_pairs(&content))
}

pub fn parse_pairs(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|line| match line.split_once('\t') {
            Some((kanji, reading)) => (kanji.trim().to_string(), reading.trim().to_string()),
            None => (line.trim().to_string(), String::new()),
        })
        .collect()
}

/// One word per line, blanks dropped
pub fn read_words(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect())
}

/// Serialize `value` to `path`, creating parent directories
pub fn write_json<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    pretty: bool,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

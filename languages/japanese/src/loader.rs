use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use yomi_core::dictionary::Dictionary;
use yomi_core::error::LoadError;

use crate::kanjidic::Kanjidic;

pub struct KanjidicLoader;

impl KanjidicLoader {
    /// Load KANJIDIC2 from file path
    pub fn load_from_file(path: &Path) -> Result<Kanjidic, LoadError> {
        tracing::info!("Loading kanjidic from file: {}", path.display());
        let file = File::open(path)
            .map_err(|e| LoadError::SourceUnavailable(format!("{}: {}", path.display(), e)))?;
        let dict = Kanjidic::from_reader(BufReader::new(file))?;
        let meta = dict.metadata();
        tracing::info!(
            "Loaded {} {} entries from file ({} skipped), database version {}",
            meta.entry_count,
            meta.name,
            meta.skipped_records,
            meta.database_version.as_deref().unwrap_or("unknown")
        );
        Ok(dict)
    }
}

use anyhow::bail;
use yomi_config::Config;
use yomi_lang_japanese::KanjiProcessor;

use crate::io::write_json;

pub fn handle_tiers(
    processor: &KanjiProcessor,
    config: &Config,
    joyo_only: bool,
) -> anyhow::Result<()> {
    if processor.dictionary().is_none() {
        bail!("Building tiers needs the kanjidic dictionary ({})", config.dictionary.path);
    }

    let lists = processor.tier_lists(joyo_only);
    for list in &lists {
        tracing::info!("{}: {} kanji", list.name, list.count);
    }

    let file = if joyo_only { "tiers_joyo.json" } else { "tiers.json" };
    write_json(&config.output.file(file), &lists, config.output.pretty)
}

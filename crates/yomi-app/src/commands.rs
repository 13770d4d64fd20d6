use std::path::PathBuf;

use clap::Subcommand;
use yomi_config::Config;
use yomi_lang_japanese::KanjiProcessor;

pub mod chars;
pub mod classify;
pub mod homophones;
pub mod tiers;

use chars::handle_chars;
use classify::{handle_classify, handle_classify_batch};
use homophones::handle_homophones;
use tiers::handle_tiers;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write cumulative frequency tiers
    Tiers {
        /// Only rank kanji carrying a school grade
        #[arg(long)]
        joyo_only: bool,
    },
    /// Write a homophone index or print one group
    Homophones {
        /// Restrict to one tier (e.g. N1)
        #[arg(long)]
        tier: Option<String>,
        /// Print the group for this reading instead of writing the index
        #[arg(long)]
        reading: Option<String>,
        /// Word list whose kanji are indexed when no dictionary is available
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Classify one kanji/reading pair
    Classify {
        kanji: String,
        reading: String,
        /// Use the transliteration heuristic instead of the dictionary
        #[arg(long)]
        no_dictionary: bool,
    },
    /// Classify every `kanji<TAB>reading` line of a file
    ClassifyBatch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        no_dictionary: bool,
    },
    /// Count characters of a word list
    Chars {
        #[arg(long)]
        input: PathBuf,
        /// Only keep words made of kanji
        #[arg(long)]
        kanji_only: bool,
        #[arg(long, default_value_t = 70)]
        top: usize,
    },
}

/// Dispatch one CLI command
pub fn run(processor: &KanjiProcessor, config: &Config, command: Command) -> anyhow::Result<()> {
    tracing::debug!("Running {:?}", command);

    match command {
        Command::Tiers { joyo_only } => handle_tiers(processor, config, joyo_only),
        Command::Homophones {
            tier,
            reading,
            input,
        } => handle_homophones(
            processor,
            config,
            tier.as_deref(),
            reading.as_deref(),
            input.as_deref(),
        ),
        Command::Classify {
            kanji,
            reading,
            no_dictionary,
        } => handle_classify(processor, &kanji, &reading, !no_dictionary),
        Command::ClassifyBatch {
            input,
            no_dictionary,
        } => handle_classify_batch(processor, config, &input, !no_dictionary),
        Command::Chars {
            input,
            kanji_only,
            top,
        } => handle_chars(&input, kanji_only, top),
    }
}

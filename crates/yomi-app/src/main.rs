use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use yomi_config::Config;
use yomi_lang_japanese::KanjiProcessor;

pub mod commands;
pub mod io;


use self::commands::Command;

#[derive(Parser)]
#[command(name = "yomi", version, about = "Kanji reading classification and homophone index")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true, default_value = "yomi.json")]
    config: PathBuf,

    /// KANJIDIC2 XML file (overrides config)
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Output directory for JSON artifacts (overrides config)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON log lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

fn init_logging(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("yomi_app=debug,yomi_lang_japanese=debug,yomi_config=debug,info")
        } else {
            EnvFilter::new("info")
        }
    });

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(atty::is(atty::Stream::Stderr))
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    let mut config = Config::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;

    if let Some(path) = &cli.dictionary {
        config.dictionary.path = path.display().to_string();
    }
    if let Some(dir) = &cli.output {
        config.output.dir = dir.display().to_string();
    }

    let processor = KanjiProcessor::from_config(&config);
    commands::run(&processor, &config, cli.command)
}

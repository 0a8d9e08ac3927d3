//! Summoners Book - command-line entry point.
//!
//! Usage: `summoners-book [list | find KEYWORD... | fuzzy QUERY | tag TAG | schema]`
//!
//! Player listings go to stdout; logs go to stderr.

use anyhow::{bail, Context, Result};
use summoners_book::matching::{FuzzyNameMatcher, HasTag, NameContainsKeywords};
use summoners_book::storage::file_schema;
use summoners_book::{
    BookStorage, Config, JsonBookStorage, ModelManager, PlayerService, SummonersBook,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: summoners-book [list | find KEYWORD... | fuzzy QUERY | tag TAG | schema]";

fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL
    let fallback = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, rest) = match args.split_first() {
        Some((cmd, rest)) => (cmd.as_str(), rest),
        None => ("list", &[][..]),
    };

    if command == "schema" {
        let schema = serde_json::to_string_pretty(&file_schema())?;
        println!("{}", schema);
        return Ok(());
    }

    let storage = JsonBookStorage::new(&config.data_file_path);
    info!(path = %storage.file_path().display(), "Using data file");

    let book = match storage.read_book() {
        Ok(Some(book)) => book,
        Ok(None) => {
            info!("Data file not found. Starting with an empty book");
            SummonersBook::new()
        }
        Err(e) => {
            warn!("Data file could not be loaded. Leaving it untouched");
            return Err(e).context("failed to load the summoners book");
        }
    };

    let mut model = ModelManager::new(&book);

    match (command, rest) {
        ("list", []) => {}
        ("find", keywords) if !keywords.is_empty() => {
            model.update_filtered_players(Box::new(NameContainsKeywords::new(keywords)));
        }
        ("fuzzy", [query]) => {
            let matcher = FuzzyNameMatcher::new(query, config.match_confidence_threshold);
            for m in matcher.rank(model.summoners_book().player_list()) {
                println!("{:>3}% {}", m.confidence, m.player);
            }
            return Ok(());
        }
        ("tag", [tag]) => {
            model.update_filtered_players(Box::new(HasTag::new(tag)));
        }
        _ => bail!(USAGE),
    }

    let view = model.filtered_players();
    for (i, player) in view.iter().enumerate() {
        println!("{}. {}", i + 1, player);
    }
    println!("{} players listed!", view.len());

    Ok(())
}

// src/main.rs
//
// Usage: pokecatalog [COUNT] [SAVE_FILE]
//
// Fetches records 1..=COUNT (default 20), prints them, and optionally saves
// them. RUST_LOG controls log output; POKECATALOG_* variables configure
// the catalog endpoint.

use anyhow::{Context, Result};
use log::info;

use pokecatalog::{AppState, FetcherConfig};

const DEFAULT_COUNT: i64 = 20;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let count = match args.next() {
        Some(raw) => raw
            .parse::<i64>()
            .with_context(|| format!("COUNT must be an integer, got {:?}", raw))?,
        None => DEFAULT_COUNT,
    };
    let save_file = args.next();

    // 1. WIRING
    let config = FetcherConfig::from_env()?;
    info!("Using catalog at {}", config.base_url());
    let state = AppState::new(config, None)?;

    // 2. FETCH (off the main task, as an interactive caller would)
    let controller = state.controller.clone();
    tokio::spawn(async move { controller.fetch_initial(count).await })
        .await
        .context("fetch task panicked")?;

    for record in state.controller.sort_by_name() {
        let types: Vec<&str> = record.types().iter().map(|t| t.as_str()).collect();
        println!("{}  [{}]  total {}", record, types.join("/"), record.stats().total());
    }

    // 3. SAVE
    if let Some(filename) = save_file {
        let path = state
            .controller
            .save(&filename)
            .with_context(|| format!("saving collection to {}", filename))?;
        println!("Saved {} records to {}", state.controller.len(), path.display());
    }

    Ok(())
}

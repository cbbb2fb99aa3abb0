use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use connect_four::config::AppConfig;
use connect_four::game::{find_winning_run, samples, Winner};
use connect_four::logging;
use connect_four::render::{describe_run, render_board, render_verdict};

const CONFIG_ENV: &str = "CONNECT_FOUR_CONFIG";
const DEFAULT_CONFIG: &str = "connect_four.toml";

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init();

    let config_path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    if !config_path.exists() {
        let defaults = AppConfig::default_toml().context("serializing default config")?;
        info!(
            "no config at {}; create one to override these defaults:\n{defaults}",
            config_path.display()
        );
    }
    let config = AppConfig::load_or_default(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    let display = &config.display;

    for sample in samples::all() {
        let board = sample
            .board()
            .with_context(|| format!("building {}", sample.name))?;
        let run = find_winning_run(&board);
        let winner = Winner::from(run);
        info!(board = sample.name, winner = winner.code(), "evaluated");

        println!("{}", render_board(&board, display));
        println!("{}", render_verdict(winner, display));
        if let Some(run) = run {
            println!("  ({})", describe_run(&run));
        }
        println!();
    }

    Ok(())
}

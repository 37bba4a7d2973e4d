use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use baseball_sim::config::AppConfig;
use baseball_sim::game::FinalScore;
use baseball_sim::logging;
use baseball_sim::sim::{write_report, Simulator, Summary};
use baseball_sim::store::ScoreStore;

/// Simulate baseball games and report the final scores.
#[derive(Parser)]
#[command(name = "baseball-sim", about = "Simulate toy baseball games")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "baseball.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<u32>,

    /// Seed the event stream for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Play games on worker threads instead of round-robin
    #[arg(long)]
    parallel: bool,

    /// SQLite database to record final scores in
    #[arg(long)]
    db: Option<PathBuf>,

    /// Drop and recreate the scores table before writing
    #[arg(long)]
    reset_db: bool,

    /// Print one JSON object per game instead of the text report
    #[arg(long)]
    json: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        app_config.simulation.num_games = games;
    }
    if cli.seed.is_some() {
        app_config.simulation.seed = cli.seed;
    }
    if cli.parallel {
        app_config.simulation.parallel = true;
    }
    if cli.db.is_some() {
        app_config.store.database_path = cli.db;
    }
    if cli.reset_db {
        app_config.store.reset_table = true;
    }
    app_config.validate().context("validating configuration")?;

    logging::init(&app_config.logging);

    let simulator = Simulator::new(app_config.simulation.clone());
    let records = simulator.run().context("simulation aborted")?;

    let summary = Summary::from_records(&records);
    write_report(&mut std::io::stdout().lock(), &records, &summary, cli.json)
        .context("writing report")?;
    info!(%summary, "batch finished");

    if let Some(mut store) =
        ScoreStore::from_config(&app_config.store).context("opening score database")?
    {
        let scores: Vec<FinalScore> = records.iter().map(|r| r.score).collect();
        store
            .insert_all(&scores)
            .context("saving scores to database")?;
    }

    Ok(())
}

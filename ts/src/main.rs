use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use tripstore::TripStore;
use tripstore::cli::{Cli, Command};
use tripstore::config::Config;

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("tripstore starting");

    match cli.command {
        Command::Trips { limit } => {
            let store = TripStore::open(&config.db_path)?;
            let trips = store.recent_trips(limit)?;
            if trips.is_empty() {
                println!("No trips stored");
                return Ok(());
            }
            for trip in trips {
                println!(
                    "{} {} {}",
                    format!("#{}", trip.id).yellow(),
                    trip.timestamp.dimmed(),
                    trip.destination.cyan()
                );
                println!("  {}", trip.user_input);
            }
        }
        Command::Costs { limit } => {
            let store = TripStore::open(&config.db_path)?;
            let costs = store.recent_costs(limit)?;
            if costs.is_empty() {
                println!("No usage recorded");
                return Ok(());
            }
            for cost in costs {
                println!(
                    "{} {} {} {}+{}={} tokens ${:.6}",
                    format!("#{}", cost.id).yellow(),
                    cost.timestamp.dimmed(),
                    cost.model.cyan(),
                    cost.prompt_tokens,
                    cost.completion_tokens,
                    cost.total_tokens,
                    cost.cost_usd
                );
            }
        }
        Command::Stats => {
            let store = TripStore::open(&config.db_path)?;
            let stats = store.stats()?;
            println!("Store: {}", config.db_path.display().to_string().cyan());
            println!("  Trips: {}", stats.trip_count);
            println!("  Usage records: {}", stats.usage_count);
            println!("  Total cost: ${:.6}", stats.total_cost_usd);
        }
    }

    Ok(())
}

//! Travel planner CLI entry point

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use tripplanner::cli::{Cli, Command};
use tripplanner::config::Config;
use tripplanner::planner::TripPlanner;
use tripplanner::repl;
use tripplanner::session::ChatSession;

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    // Chat output owns stdout, so logs go to a file under the data dir
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripplanner")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let level = match cli_log_level.map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    };

    let log_file = fs::File::create(log_dir.join("tripplanner.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Travel planner loaded config: model={}", config.llm.model);

    match cli.command {
        Some(Command::Plan { message }) => cmd_plan(&config, &message).await,
        Some(Command::Chat { message }) => repl::run_interactive(&config, message).await,
        None => repl::run_interactive(&config, None).await,
    }
}

/// Run a single planning turn and print the reply
async fn cmd_plan(config: &Config, message: &str) -> Result<()> {
    config.validate()?;

    let planner = TripPlanner::from_config(config)?;
    let mut session = ChatSession::new();

    let reply = planner.handle_turn(&mut session, message).await;
    println!("{}", reply);

    Ok(())
}

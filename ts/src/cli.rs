//! CLI argument parsing for tripstore

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tripstore")]
#[command(author, version, about = "Inspect the append-only trip/usage store", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List recently stored trips
    Trips {
        /// Maximum rows to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// List recent per-call token costs
    Costs {
        /// Maximum rows to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show aggregate store statistics
    Stats,
}

//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Travel planner chat CLI
#[derive(Parser)]
#[command(
    name = "tp",
    about = "Conversational travel planner backed by an LLM and a weather API",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start an interactive chat session (default)
    Chat {
        /// Optional first message to send before the prompt
        message: Option<String>,
    },

    /// Run a single planning turn and print the reply
    Plan {
        /// Travel request, e.g. "trip to Paris for 2 people, 3 days"
        message: String,
    },
}

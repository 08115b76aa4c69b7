//! Interactive chat REPL for the travel planner
//!
//! The UI adapter: binds the turn orchestrator to a readline loop. The
//! REPL owns the session, forwards every non-command line to the planner
//! and prints the reply.

mod session;

pub use session::ReplSession;

use eyre::Result;

use crate::config::Config;
use crate::planner::TripPlanner;

/// Run the interactive chat loop
///
/// This is the main entry point for `tp chat`.
pub async fn run_interactive(config: &Config, initial_message: Option<String>) -> Result<()> {
    // Fail fast on missing credentials before any prompt is shown
    config.validate()?;

    let planner = TripPlanner::from_config(config)?;

    let mut session = ReplSession::new(planner);
    session.run(initial_message).await
}

//! REPL session management

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::llm::Role;
use crate::planner::TripPlanner;
use crate::session::ChatSession;

/// Interactive chat session
pub struct ReplSession {
    planner: TripPlanner,
    session: ChatSession,
}

enum SlashResult {
    Continue,
    Quit,
}

impl ReplSession {
    /// Create a new REPL session with a fresh conversation
    pub fn new(planner: TripPlanner) -> Self {
        Self {
            planner,
            session: ChatSession::new(),
        }
    }

    /// Run the REPL main loop
    pub async fn run(&mut self, initial_message: Option<String>) -> Result<()> {
        self.print_welcome();

        // If an initial message was provided, process it first
        if let Some(message) = initial_message {
            println!("{} {}", ">".bright_green(), message);
            self.process_message(&message).await;
        }

        // Create readline editor for proper line editing
        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            let readline = rl.readline(&format!("{} ", ">".bright_green()));

            match readline {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(input);

                    if input.starts_with('/') {
                        match self.handle_slash_command(input) {
                            SlashResult::Continue => continue,
                            SlashResult::Quit => break,
                        }
                    } else {
                        self.process_message(input).await;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C - just show new prompt
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D - exit
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Safe travels!");
        Ok(())
    }

    /// Forward one message to the planner and print the reply
    async fn process_message(&mut self, message: &str) {
        let reply = self.planner.handle_turn(&mut self.session, message).await;
        println!();
        println!("{}", reply);
        println!();
    }

    /// Print welcome message
    fn print_welcome(&self) {
        println!();
        println!("{}", "Travel Planner Chat".bright_cyan().bold());
        println!("Tell me where you'd like to go - itinerary, weather, hotels and more.");
        println!("Type {} for help, {} to quit", "/help".yellow(), "/quit".yellow());
        println!();
    }

    /// Handle slash commands
    fn handle_slash_command(&mut self, input: &str) -> SlashResult {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts.first().copied().unwrap_or("");

        match cmd {
            "/help" | "/h" => {
                self.print_help();
                SlashResult::Continue
            }
            "/quit" | "/q" | "/exit" => SlashResult::Quit,
            "/clear" | "/c" => {
                self.session.clear();
                println!("{}", "Conversation cleared.".dimmed());
                SlashResult::Continue
            }
            "/history" => {
                self.print_history();
                SlashResult::Continue
            }
            "/destinations" | "/d" => {
                self.print_destinations();
                SlashResult::Continue
            }
            _ => {
                println!("{} Unknown command: {}", "?".yellow(), cmd);
                println!("Type {} for available commands", "/help".yellow());
                SlashResult::Continue
            }
        }
    }

    /// Print help message
    fn print_help(&self) {
        println!();
        println!("{}", "Available Commands:".bright_cyan());
        println!("  {:16} Show this help", "/help".yellow());
        println!("  {:16} Exit the chat", "/quit".yellow());
        println!("  {:16} Clear conversation history", "/clear".yellow());
        println!("  {:16} Show conversation history", "/history".yellow());
        println!("  {:16} Show destinations seen this session", "/destinations".yellow());
        println!();
        println!("Anything else is treated as a travel request, e.g.:");
        println!("  {}", "I want a trip to Paris for 2 people, 3 days".dimmed());
        println!();
    }

    /// Print conversation history
    fn print_history(&self) {
        if self.session.messages().is_empty() {
            println!("{}", "No conversation history.".dimmed());
            return;
        }

        println!();
        println!("{}", "Conversation History:".bright_cyan());
        for (i, msg) in self.session.messages().iter().enumerate() {
            let role = match msg.role {
                Role::User => "User".bright_green(),
                Role::Assistant => "Assistant".bright_blue(),
            };
            let preview: String = msg.text.chars().take(60).collect();
            let preview = if msg.text.chars().count() > 60 {
                format!("{}...", preview)
            } else {
                preview
            };
            println!("  {:2}. {:9} {}", i + 1, role, preview);
        }
        println!();
    }

    /// Print destinations seen this session
    fn print_destinations(&self) {
        if self.session.destinations().is_empty() {
            println!("{}", "No destinations yet.".dimmed());
            return;
        }

        println!();
        println!("{}", "Destinations this session:".bright_cyan());
        for destination in self.session.destinations() {
            println!("  {}", destination.cyan());
        }
        println!();
    }
}

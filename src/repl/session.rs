//! REPL session management

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::conversation::Role;
use crate::display::StdoutTranscript;
use crate::orchestrator::Orchestrator;

/// Interactive REPL session
///
/// Reads one line per turn and hands it to the orchestrator; every step of a
/// turn blocks the prompt until it completes. Slash commands are handled
/// locally and never reach the orchestrator.
pub struct ReplSession {
    orchestrator: Orchestrator,
    transcript: StdoutTranscript,
}

impl ReplSession {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator,
            transcript: StdoutTranscript,
        }
    }

    /// Run the REPL main loop
    pub async fn run(&mut self, initial_message: Option<String>) -> Result<()> {
        self.print_welcome();

        if let Some(message) = initial_message {
            self.orchestrator.handle_turn(&message, &self.transcript).await?;
        }

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
                        self.orchestrator.handle_turn(input, &self.transcript).await?;
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

        println!("Goodbye!");
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "lmdesk".bright_cyan().bold());
        println!("Type {} for help, {} to quit", "/help".yellow(), "/quit".yellow());
        println!();
    }

    /// Handle slash commands
    ///
    /// No `/clear`: the conversation history is append-only for the session.
    fn handle_slash_command(&mut self, input: &str) -> SlashResult {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts.first().copied().unwrap_or("");

        match cmd {
            "/help" | "/h" => {
                self.print_help();
                SlashResult::Continue
            }
            "/quit" | "/q" | "/exit" => SlashResult::Quit,
            "/history" => {
                self.print_history();
                SlashResult::Continue
            }
            _ => {
                println!("{} Unknown command: {}", "?".yellow(), cmd);
                println!("Type {} for available commands", "/help".yellow());
                SlashResult::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "Available Commands:".bright_cyan());
        println!("  {:12} Show this help", "/help".yellow());
        println!("  {:12} Exit the session", "/quit".yellow());
        println!("  {:12} Show conversation history", "/history".yellow());
        println!();
    }

    fn print_history(&self) {
        let conversation = self.orchestrator.conversation();
        if conversation.is_empty() {
            println!("{}", "No conversation history.".dimmed());
            return;
        }

        println!();
        println!("{}", "Conversation History:".bright_cyan());
        for (i, turn) in conversation.turns().iter().enumerate() {
            let role = match turn.role {
                Role::User => "User".bright_green(),
                Role::Assistant => "Assistant".bright_blue(),
            };
            let preview: String = turn.content.chars().take(50).collect();
            let preview = if turn.content.chars().count() > 50 {
                format!("{}...", preview)
            } else {
                preview
            };
            println!("  {}. {}: {}", i + 1, role, preview);
        }
        println!();
    }
}

/// Result of handling a slash command
enum SlashResult {
    Continue,
    Quit,
}

//! Interactive REPL
//!
//! Terminal display surface for the assistant: renders the growing
//! transcript and accepts one line of free text per turn.

mod session;

pub use session::ReplSession;

use std::sync::Arc;

use eyre::Result;

use crate::config::Config;
use crate::llm::{CompletionClient, LmStudioClient};
use crate::orchestrator::Orchestrator;

/// Run the interactive session
///
/// This is the main entry point for the `lmdesk` binary.
pub async fn run_interactive(config: &Config, initial_message: Option<String>) -> Result<()> {
    let llm: Arc<dyn CompletionClient> = Arc::new(
        LmStudioClient::from_config(&config.llm).map_err(|e| eyre::eyre!("Failed to create completion client: {}", e))?,
    );

    let orchestrator = Orchestrator::new(llm, config)?;

    let mut session = ReplSession::new(orchestrator);
    session.run(initial_message).await
}

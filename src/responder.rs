//! Reply generation
//!
//! Produces the assistant's conversational reply. The prompt is the raw user
//! message only - prior turns are deliberately not included, so the
//! conversation history feeds task planning but not the replies themselves.
//! That asymmetry is a preserved property of the design; do not "fix" it by
//! threading the rendered context through here.

use std::sync::Arc;

use tracing::debug;

use crate::llm::CompletionClient;

/// Generates assistant replies from single user messages
pub struct ResponseGenerator {
    llm: Arc<dyn CompletionClient>,
    reply_max_tokens: u32,
}

impl ResponseGenerator {
    pub fn new(llm: Arc<dyn CompletionClient>, reply_max_tokens: u32) -> Self {
        Self { llm, reply_max_tokens }
    }

    /// Generate the reply text for one user message
    ///
    /// Always returns displayable text: backend failure degrades to the
    /// fixed no-output fallback rather than an error.
    pub async fn reply(&self, user_message: &str) -> String {
        debug!(message_len = user_message.len(), "reply: requesting completion");
        self.llm.generate(user_message, self.reply_max_tokens).await.into_text()
    }
}

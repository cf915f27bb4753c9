//! CompletionClient trait definition

use async_trait::async_trait;

use super::LlmError;

/// Text shown in place of a reply when the backend produced nothing usable.
///
/// This is the user-visible fallback, not an error signal: callers that only
/// need something to display call [`Completion::into_text`] and get this
/// string for the `Empty` and `Unavailable` cases.
pub const NO_OUTPUT_TEXT: &str = "No response generated.";

/// Outcome of one completion call
///
/// The backend's output is untrusted free text and its availability is not
/// guaranteed, so the client reports all three outcomes as ordinary values
/// rather than conflating them into a single sentinel string:
///
/// - `Generated` - the backend returned at least one choice; the text is
///   passed through verbatim (no trimming, no sanitization)
/// - `Empty` - a well-formed response with no choices
/// - `Unavailable` - transport or protocol failure
#[derive(Debug)]
pub enum Completion {
    Generated(String),
    Empty,
    Unavailable(LlmError),
}

impl Completion {
    /// Generated text, if any
    pub fn as_generated(&self) -> Option<&str> {
        match self {
            Completion::Generated(text) => Some(text),
            _ => None,
        }
    }

    /// Collapse to display text, substituting [`NO_OUTPUT_TEXT`] when the
    /// backend produced nothing usable
    pub fn into_text(self) -> String {
        match self {
            Completion::Generated(text) => text,
            Completion::Empty | Completion::Unavailable(_) => NO_OUTPUT_TEXT.to_string(),
        }
    }
}

/// One-shot completion client
///
/// `generate` is infallible by construction: failures come back inside the
/// [`Completion`] value. Each call is independent - the client holds no
/// conversation state, and sampling parameters are fixed at construction,
/// not per call.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one prompt with a token budget and return whatever the backend
    /// produced
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Completion;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Mock completion client for unit tests
    ///
    /// Pops scripted completions in order; once exhausted it reports
    /// `Unavailable`.
    pub struct MockCompletionClient {
        responses: Mutex<Vec<Completion>>,
        prompts: Mutex<Vec<(String, u32)>>,
    }

    impl MockCompletionClient {
        pub fn new(responses: Vec<Completion>) -> Self {
            Self {
                responses: Mutex::new(responses),
                prompts: Mutex::new(Vec::new()),
            }
        }

        /// Prompts and token budgets seen so far, in call order
        pub fn calls(&self) -> Vec<(String, u32)> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionClient for MockCompletionClient {
        async fn generate(&self, prompt: &str, max_tokens: u32) -> Completion {
            self.prompts.lock().unwrap().push((prompt.to_string(), max_tokens));
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                Completion::Unavailable(LlmError::MalformedResponse("no more mock responses".to_string()))
            } else {
                responses.remove(0)
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_client_returns_responses_in_order() {
            let client = MockCompletionClient::new(vec![
                Completion::Generated("first".to_string()),
                Completion::Generated("second".to_string()),
            ]);

            let first = client.generate("a", 10).await;
            assert_eq!(first.as_generated(), Some("first"));

            let second = client.generate("b", 20).await;
            assert_eq!(second.as_generated(), Some("second"));

            assert_eq!(client.calls(), vec![("a".to_string(), 10), ("b".to_string(), 20)]);
        }

        #[tokio::test]
        async fn test_mock_client_unavailable_when_exhausted() {
            let client = MockCompletionClient::new(vec![]);
            let result = client.generate("anything", 5).await;
            assert!(matches!(result, Completion::Unavailable(_)));
        }
    }
}

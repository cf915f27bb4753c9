//! Completion backend error types

use thiserror::Error;

/// Errors that can occur while talking to the completion backend
///
/// These never cross the `CompletionClient` boundary as `Err` values: the
/// client folds them into [`Completion::Unavailable`](super::Completion) so
/// planning and reply generation stay infallible.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Backend returned status {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),
}

impl LlmError {
    /// HTTP status for API errors, if this error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_on_api_error() {
        let err = LlmError::ApiError {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.status(), Some(503));

        let err = LlmError::MalformedResponse("not json".to_string());
        assert_eq!(err.status(), None);
    }
}

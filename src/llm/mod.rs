//! Completion client module
//!
//! Provides the completion client trait, the LM Studio implementation, and
//! the error taxonomy for backend failures.

pub mod client;
mod error;
mod lmstudio;

pub use client::{Completion, CompletionClient, NO_OUTPUT_TEXT};
pub use error::LlmError;
pub use lmstudio::LmStudioClient;

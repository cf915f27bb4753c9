//! lmdesk - interactive desk assistant for a local completion backend
//!
//! Converses with a locally hosted text-completion service, derives a list
//! of discrete tasks from the ongoing conversation, runs them, and appends
//! every exchange to durable storage. Single local user, one strictly
//! linear turn at a time.
//!
//! # Modules
//!
//! - [`llm`] - completion client trait and the LM Studio implementation
//! - [`conversation`] - append-only conversation history
//! - [`planner`] - tolerant derivation of task lists from the conversation
//! - [`executor`] - sequential task execution
//! - [`responder`] - assistant reply generation
//! - [`logger`] - append-only interaction persistence
//! - [`orchestrator`] - the per-turn state machine tying it together
//! - [`repl`] - the terminal display surface

pub mod cli;
pub mod config;
pub mod conversation;
pub mod display;
pub mod executor;
pub mod llm;
pub mod logger;
pub mod orchestrator;
pub mod planner;
pub mod repl;
pub mod responder;

pub use config::{Config, LlmConfig, WorkspaceConfig};
pub use conversation::{ConversationState, Role, Turn};
pub use display::{MemoryTranscript, StdoutTranscript, Transcript};
pub use executor::TaskExecutor;
pub use llm::{Completion, CompletionClient, LlmError, LmStudioClient, NO_OUTPUT_TEXT};
pub use logger::InteractionLogger;
pub use orchestrator::{Orchestrator, TurnPhase};
pub use planner::{TaskDescriptor, TaskPlanner};
pub use responder::ResponseGenerator;

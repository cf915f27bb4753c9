//! Turn orchestration
//!
//! The control point invoked once per user input. A turn is strictly linear
//! and synchronous in effect: each phase completes before the next begins,
//! and a turn cannot be interrupted or cancelled once started. The
//! orchestrator owns the conversation history for the process lifetime and
//! the task queue for the duration of one turn.

use std::sync::Arc;

use eyre::Result;
use tracing::debug;

use crate::config::Config;
use crate::conversation::{ConversationState, Turn};
use crate::display::Transcript;
use crate::executor::TaskExecutor;
use crate::llm::CompletionClient;
use crate::logger::InteractionLogger;
use crate::planner::{TaskDescriptor, TaskPlanner};
use crate::responder::ResponseGenerator;

/// Phase of the per-turn state machine
///
/// `Idle` between turns; a received input walks the remaining phases in
/// order and returns to `Idle`. There is no terminal phase other than
/// process exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    AwaitingPlan,
    AwaitingExecution,
    AwaitingReply,
    Logging,
}

impl TurnPhase {
    /// The phase that follows this one
    pub fn next(self) -> TurnPhase {
        match self {
            TurnPhase::Idle => TurnPhase::AwaitingPlan,
            TurnPhase::AwaitingPlan => TurnPhase::AwaitingExecution,
            TurnPhase::AwaitingExecution => TurnPhase::AwaitingReply,
            TurnPhase::AwaitingReply => TurnPhase::Logging,
            TurnPhase::Logging => TurnPhase::Idle,
        }
    }
}

/// Sequences one conversation turn end to end
pub struct Orchestrator {
    conversation: ConversationState,
    queue: Vec<TaskDescriptor>,
    phase: TurnPhase,
    planner: TaskPlanner,
    executor: TaskExecutor,
    responder: ResponseGenerator,
    logger: InteractionLogger,
}

impl Orchestrator {
    /// Wire up the per-turn pipeline from a completion client and config
    ///
    /// Creates the workspace directory on first run.
    pub fn new(llm: Arc<dyn CompletionClient>, config: &Config) -> Result<Self> {
        let logger = InteractionLogger::create(&config.workspace.dir, &config.workspace.history_file)?;

        Ok(Self {
            conversation: ConversationState::new(),
            queue: Vec::new(),
            phase: TurnPhase::Idle,
            planner: TaskPlanner::new(llm.clone(), config.llm.plan_max_tokens),
            executor: TaskExecutor::default(),
            responder: ResponseGenerator::new(llm, config.llm.reply_max_tokens),
            logger,
        })
    }

    /// Replace the executor (tests shorten the simulated-work delay)
    pub fn with_executor(mut self, executor: TaskExecutor) -> Self {
        self.executor = executor;
        self
    }

    /// The conversation history accumulated so far
    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }

    /// Current phase; `Idle` between turns
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    fn advance(&mut self) {
        let next = self.phase.next();
        debug!(from = ?self.phase, to = ?next, "advance: turn phase transition");
        self.phase = next;
    }

    /// Handle one user input as a complete turn
    ///
    /// Sequence: append user turn, plan tasks, execute them, generate the
    /// reply, append assistant turn, persist the interaction. Planning
    /// failures degrade silently to an empty queue; a persistence failure
    /// propagates and aborts the turn.
    pub async fn handle_turn(&mut self, input: &str, transcript: &dyn Transcript) -> Result<()> {
        transcript.line(&format!("User: {input}"));
        self.conversation.append(Turn::user(input));
        self.advance();

        debug_assert!(self.queue.is_empty(), "task queue must be empty before planning");
        self.queue = self.planner.plan(&self.conversation, transcript).await;
        self.advance();

        self.executor.run(&mut self.queue, transcript).await;
        self.advance();

        let reply = self.responder.reply(input).await;
        transcript.line(&format!("Assistant: {reply}"));
        self.conversation.append(Turn::assistant(&reply));
        self.advance();

        self.logger.persist(input, &reply)?;
        self.advance();

        Ok(())
    }
}

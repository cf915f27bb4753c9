//! Task planning
//!
//! Derives a per-turn task list from the conversation. The backend's output
//! is untrusted free text, so parsing must never raise: malformed output
//! degrades to "no tasks this turn" with a single transcript notice, and the
//! turn proceeds.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::conversation::ConversationState;
use crate::display::Transcript;
use crate::llm::{Completion, CompletionClient};

/// Fixed instruction appended after the rendered conversation context
const PLAN_INSTRUCTION: &str = "Based on the current conversation context, generate a list of tasks \
                                to be executed by the AI assistant. Provide the tasks in JSON format.";

/// Transcript notice emitted when planner output cannot be parsed
pub const PLAN_FAILED_NOTICE: &str = "Failed to generate tasks.";

/// A unit of work derived from the conversation
///
/// Planner-supplied fields other than `name` are carried but ignored by
/// execution. `name` is structurally required to run; a descriptor without
/// it is malformed and gets skipped by the executor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDescriptor {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Parse planner output as a JSON array of task objects
///
/// Structural validation beyond "array of objects" is deferred to the
/// executor.
fn parse_tasks(raw: &str) -> Result<Vec<TaskDescriptor>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Plans tasks from the conversation history
pub struct TaskPlanner {
    llm: Arc<dyn CompletionClient>,
    plan_max_tokens: u32,
}

impl TaskPlanner {
    pub fn new(llm: Arc<dyn CompletionClient>, plan_max_tokens: u32) -> Self {
        Self { llm, plan_max_tokens }
    }

    /// Build the planning prompt: rendered context, then the fixed
    /// instruction on its own line
    fn build_prompt(history: &ConversationState) -> String {
        format!("{}\n{}", history.render_context(), PLAN_INSTRUCTION)
    }

    /// Derive this turn's task list from the conversation
    ///
    /// Returns an empty list on backend failure or unparseable output; the
    /// only caller-visible trace of that is one notice line on the
    /// transcript.
    pub async fn plan(&self, history: &ConversationState, transcript: &dyn Transcript) -> Vec<TaskDescriptor> {
        let prompt = Self::build_prompt(history);
        let completion = self.llm.generate(&prompt, self.plan_max_tokens).await;

        let raw = match completion {
            Completion::Generated(text) => text,
            Completion::Empty => {
                debug!("plan: backend returned no choices");
                transcript.line(PLAN_FAILED_NOTICE);
                return Vec::new();
            }
            Completion::Unavailable(err) => {
                warn!(error = %err, "plan: completion backend unavailable");
                transcript.line(PLAN_FAILED_NOTICE);
                return Vec::new();
            }
        };

        match parse_tasks(&raw) {
            Ok(tasks) => {
                debug!(task_count = tasks.len(), "plan: parsed task list");
                tasks
            }
            Err(e) => {
                debug!(error = %e, "plan: output was not a JSON task array");
                transcript.line(PLAN_FAILED_NOTICE);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Turn;
    use crate::display::MemoryTranscript;
    use crate::llm::LlmError;
    use crate::llm::client::mock::MockCompletionClient;

    #[test]
    fn test_parse_tasks_valid_array() {
        let tasks = parse_tasks(r#"[{"name": "check_weather"}, {"name": "set_alarm", "when": "7am"}]"#).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].name.as_deref(), Some("check_weather"));
        assert_eq!(tasks[1].extra["when"], "7am");
    }

    #[test]
    fn test_parse_tasks_rejects_non_array() {
        assert!(parse_tasks(r#"{"name": "solo"}"#).is_err());
        assert!(parse_tasks("not json").is_err());
    }

    #[test]
    fn test_parse_tasks_missing_name_is_structural_not_fatal() {
        let tasks = parse_tasks(r#"[{"description": "no name here"}]"#).unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].name.is_none());
    }

    #[test]
    fn test_build_prompt_appends_instruction() {
        let mut history = ConversationState::new();
        history.append(Turn::user("remind me to water the plants"));

        let prompt = TaskPlanner::build_prompt(&history);
        assert!(prompt.starts_with("user: remind me to water the plants\n"));
        assert!(prompt.ends_with("Provide the tasks in JSON format."));
    }

    #[tokio::test]
    async fn test_plan_returns_parsed_tasks() {
        let llm = Arc::new(MockCompletionClient::new(vec![Completion::Generated(
            r#"[{"name": "check_weather"}]"#.to_string(),
        )]));
        let planner = TaskPlanner::new(llm.clone(), 200);
        let transcript = MemoryTranscript::new();

        let mut history = ConversationState::new();
        history.append(Turn::user("what's the weather?"));

        let tasks = planner.plan(&history, &transcript).await;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name.as_deref(), Some("check_weather"));
        assert!(transcript.lines().is_empty());

        // Planner uses its fixed token budget
        assert_eq!(llm.calls()[0].1, 200);
    }

    #[tokio::test]
    async fn test_plan_failure_degrades_to_empty_with_notice() {
        let llm = Arc::new(MockCompletionClient::new(vec![Completion::Generated(
            "not json".to_string(),
        )]));
        let planner = TaskPlanner::new(llm, 200);
        let transcript = MemoryTranscript::new();
        let history = ConversationState::new();

        let tasks = planner.plan(&history, &transcript).await;
        assert!(tasks.is_empty());
        assert_eq!(transcript.lines(), vec![PLAN_FAILED_NOTICE]);
    }

    #[tokio::test]
    async fn test_plan_backend_unavailable_degrades_to_empty() {
        let llm = Arc::new(MockCompletionClient::new(vec![Completion::Unavailable(
            LlmError::ApiError {
                status: 502,
                message: "bad gateway".to_string(),
            },
        )]));
        let planner = TaskPlanner::new(llm, 200);
        let transcript = MemoryTranscript::new();
        let history = ConversationState::new();

        let tasks = planner.plan(&history, &transcript).await;
        assert!(tasks.is_empty());
        assert_eq!(transcript.lines(), vec![PLAN_FAILED_NOTICE]);
    }
}

//! Task execution
//!
//! Drains the per-turn task queue strictly in planner order, one task at a
//! time on the single control flow. Execution is a logged no-op with a fixed
//! simulated-work delay; there is no parallelism, reordering, or dependency
//! resolution.

use std::time::Duration;

use tracing::{debug, warn};

use crate::display::Transcript;
use crate::planner::TaskDescriptor;

/// Transcript notice for a descriptor missing its required `name` field
pub const NAMELESS_TASK_NOTICE: &str = "Skipping task with no name.";

/// Executes the per-turn task queue
pub struct TaskExecutor {
    task_delay: Duration,
}

impl Default for TaskExecutor {
    fn default() -> Self {
        Self {
            task_delay: Duration::from_secs(1),
        }
    }
}

impl TaskExecutor {
    /// Create an executor with a custom simulated-work delay
    pub fn with_delay(task_delay: Duration) -> Self {
        Self { task_delay }
    }

    /// Run every queued task in order, then clear the queue
    ///
    /// Emits `Executing task: {name}` and `Task completed: {name}` per task
    /// with the simulated-work delay in between. A descriptor without a
    /// `name` is skipped with a notice; the rest of the queue still runs.
    /// The queue is cleared unconditionally, so it is empty when this
    /// returns even if every descriptor was malformed.
    pub async fn run(&self, queue: &mut Vec<TaskDescriptor>, transcript: &dyn Transcript) {
        debug!(task_count = queue.len(), "run: draining task queue");

        for task in queue.iter() {
            let Some(name) = task.name.as_deref() else {
                warn!(?task.extra, "run: descriptor missing required name field");
                transcript.line(NAMELESS_TASK_NOTICE);
                continue;
            };

            transcript.line(&format!("Executing task: {name}"));
            tokio::time::sleep(self.task_delay).await;
            transcript.line(&format!("Task completed: {name}"));
        }

        queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::MemoryTranscript;

    fn named(name: &str) -> TaskDescriptor {
        TaskDescriptor {
            name: Some(name.to_string()),
            extra: serde_json::Map::new(),
        }
    }

    fn nameless() -> TaskDescriptor {
        TaskDescriptor {
            name: None,
            extra: serde_json::Map::new(),
        }
    }

    #[tokio::test]
    async fn test_run_emits_events_in_planner_order() {
        let executor = TaskExecutor::with_delay(Duration::from_millis(1));
        let transcript = MemoryTranscript::new();
        let mut queue = vec![named("check_weather"), named("set_alarm")];

        executor.run(&mut queue, &transcript).await;

        assert_eq!(
            transcript.lines(),
            vec![
                "Executing task: check_weather",
                "Task completed: check_weather",
                "Executing task: set_alarm",
                "Task completed: set_alarm",
            ]
        );
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn test_run_skips_nameless_descriptor_and_continues() {
        let executor = TaskExecutor::with_delay(Duration::from_millis(1));
        let transcript = MemoryTranscript::new();
        let mut queue = vec![nameless(), named("after_the_bad_one")];

        executor.run(&mut queue, &transcript).await;

        assert_eq!(
            transcript.lines(),
            vec![
                NAMELESS_TASK_NOTICE,
                "Executing task: after_the_bad_one",
                "Task completed: after_the_bad_one",
            ]
        );
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn test_run_empty_queue_is_a_noop() {
        let executor = TaskExecutor::with_delay(Duration::from_millis(1));
        let transcript = MemoryTranscript::new();
        let mut queue = Vec::new();

        executor.run(&mut queue, &transcript).await;

        assert!(transcript.lines().is_empty());
        assert!(queue.is_empty());
    }
}

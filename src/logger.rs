//! Interaction persistence
//!
//! Appends one record per completed turn to a plain text file inside the
//! workspace directory. Records are two lines (`User: ...`, `Assistant: ...`)
//! plus a trailing blank line, append-only, never updated or deleted. Write
//! failures are not recovered here - they propagate and abort the turn.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use tracing::debug;

/// Append-only sink for (user message, assistant reply) pairs
pub struct InteractionLogger {
    path: PathBuf,
}

impl InteractionLogger {
    /// Create the workspace directory if needed and open a logger for the
    /// history file inside it
    pub fn create(workspace_dir: impl AsRef<Path>, file_name: &str) -> Result<Self> {
        let workspace_dir = workspace_dir.as_ref();
        fs::create_dir_all(workspace_dir)
            .with_context(|| format!("Failed to create workspace directory {}", workspace_dir.display()))?;

        let path = workspace_dir.join(file_name);
        debug!(?path, "create: interaction log ready");
        Ok(Self { path })
    }

    /// Path of the underlying history file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one interaction record
    pub fn persist(&self, prompt: &str, response: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;

        writeln!(file, "User: {prompt}")?;
        writeln!(file, "Assistant: {response}")?;
        writeln!(file)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_persist_appends_record_format() {
        let dir = TempDir::new().unwrap();
        let logger = InteractionLogger::create(dir.path(), "interaction_history.txt").unwrap();

        logger.persist("hi", "hello").unwrap();

        let content = fs::read_to_string(logger.path()).unwrap();
        assert_eq!(content, "User: hi\nAssistant: hello\n\n");
    }

    #[test]
    fn test_persist_never_overwrites_prior_records() {
        let dir = TempDir::new().unwrap();
        let logger = InteractionLogger::create(dir.path(), "interaction_history.txt").unwrap();

        logger.persist("first", "one").unwrap();
        logger.persist("second", "two").unwrap();

        let content = fs::read_to_string(logger.path()).unwrap();
        assert_eq!(content, "User: first\nAssistant: one\n\nUser: second\nAssistant: two\n\n");
    }

    #[test]
    fn test_create_makes_workspace_directory() {
        let dir = TempDir::new().unwrap();
        let workspace = dir.path().join("assistant_workspace");
        assert!(!workspace.exists());

        let logger = InteractionLogger::create(&workspace, "interaction_history.txt").unwrap();
        assert!(workspace.is_dir());
        logger.persist("a", "b").unwrap();
        assert!(logger.path().is_file());
    }
}

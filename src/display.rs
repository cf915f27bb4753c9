//! Display surface
//!
//! The core forwards human-readable events as single text lines appended to
//! a growing transcript. The surface itself has no logic, so it sits behind
//! a trait: the REPL renders to stdout, tests collect lines in memory.

use std::sync::Mutex;

use colored::Colorize;

/// Sink for transcript lines
pub trait Transcript: Send + Sync {
    /// Append one line to the transcript
    fn line(&self, text: &str);
}

/// Transcript rendered to stdout
///
/// Each entry is followed by a blank line. User and assistant lines get
/// their prefixes highlighted; everything else is dimmed as status output.
#[derive(Debug, Default)]
pub struct StdoutTranscript;

impl Transcript for StdoutTranscript {
    fn line(&self, text: &str) {
        if let Some(rest) = text.strip_prefix("User: ") {
            println!("{} {}\n", "User:".bright_green(), rest);
        } else if let Some(rest) = text.strip_prefix("Assistant: ") {
            println!("{} {}\n", "Assistant:".bright_blue(), rest);
        } else {
            println!("{}\n", text.dimmed());
        }
    }
}

/// Transcript collected in memory, for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryTranscript {
    lines: Mutex<Vec<String>>,
}

impl MemoryTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines appended so far, in order
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Transcript for MemoryTranscript {
    fn line(&self, text: &str) {
        self.lines.lock().unwrap().push(text.to_string());
    }
}

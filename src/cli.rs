//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// lmdesk - interactive assistant for a local completion backend
#[derive(Debug, Parser)]
#[command(name = "lmdesk", about = "Interactive desk assistant for a locally hosted completion backend", version)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)")]
    pub log_level: Option<String>,

    /// Optional first message, sent before the interactive prompt
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,
}

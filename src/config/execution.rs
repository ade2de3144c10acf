//! Execution configuration for a single run.
//!
//! This module defines the options that control how the writer runs,
//! including dry-run mode, JSON output and log verbosity.

use crate::logger::LogLevel;

/// Configuration for run behavior.
#[derive(Clone, Debug)]
pub struct ExecutionOptions {
    /// Whether to run in dry-run mode (nothing is written to disk)
    pub dry_run: bool,

    /// Whether to emit a single JSON document instead of log lines
    pub json: bool,

    /// Minimum level of log messages that get printed
    pub log_level: LogLevel,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            json: false,
            log_level: LogLevel::Info,
        }
    }
}

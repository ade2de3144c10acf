//! JSON output for `--json` mode.
//!
//! A run produces exactly one document on stdout so the result can be piped
//! into other tools.

use serde::Serialize;

use crate::{
    env_ts::EnvTsOutcome,
    logger::{LogEntry, LogLevel},
};

/// A log message as it appears in the JSON document.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct JsonMessage {
    pub level: LogLevel,
    pub category: String,
    pub message: String,
}

impl From<LogEntry> for JsonMessage {
    fn from(entry: LogEntry) -> Self {
        Self {
            level: entry.level,
            category: entry.category,
            message: entry.message,
        }
    }
}

/// Result of a single run.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// Path of `env.d.ts`, relative to the project root
    pub path: String,

    /// One of `created`, `updated`, `unchanged`, `skipped`
    pub action: &'static str,

    /// Whether the contents were only planned, not written
    pub dry_run: bool,

    /// New file contents, `null` when nothing was written
    pub content: Option<String>,

    /// Messages emitted during the run, at or above the configured level
    pub messages: Vec<JsonMessage>,

    #[serde(skip)]
    min_level: LogLevel,
}

impl JsonOutput {
    /// Start a document for one run, with no messages yet.
    #[must_use]
    pub fn new(path: String, outcome: &EnvTsOutcome, dry_run: bool, min_level: LogLevel) -> Self {
        Self {
            path,
            action: outcome.action(),
            dry_run,
            content: outcome.contents().map(str::to_string),
            messages: Vec::new(),
            min_level,
        }
    }

    /// Add messages about the run itself (resolved layout, outcome).
    #[must_use]
    pub fn with_messages(mut self, entries: Vec<LogEntry>) -> Self {
        self.push_messages(entries);
        self
    }

    /// Add the messages the plugin emitted while writing `env.d.ts`.
    ///
    /// In dry-run mode these describe writes that never happened and are
    /// dropped.
    #[must_use]
    pub fn with_plugin_messages(mut self, entries: Vec<LogEntry>) -> Self {
        if !self.dry_run {
            self.push_messages(entries);
        }
        self
    }

    fn push_messages(&mut self, entries: Vec<LogEntry>) {
        let min_level = self.min_level;
        self.messages.extend(
            entries
                .into_iter()
                .filter(|e| e.level >= min_level)
                .map(JsonMessage::from),
        );
    }
}

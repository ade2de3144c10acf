//! Log sinks for user-visible notifications.
//!
//! Messages carry a level and a category tag (e.g. `astro`, `content`).
//! [`ConsoleLogger`] prints them to the terminal, [`MemoryLogger`] keeps them
//! around so they can be inspected or serialized later.

use std::{cell::RefCell, io::Write, rc::Rc};

use chrono::Local;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Severity of a log message, ordered from most to least verbose.
///
/// `Silent` is only meaningful as a threshold: a sink set to `Silent` drops
/// everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Silent,
}

/// Destination for log messages.
pub trait LogSink {
    /// Record a message under a category tag.
    fn log(&self, level: LogLevel, category: &str, message: &str);

    fn debug(&self, category: &str, message: &str) {
        self.log(LogLevel::Debug, category, message);
    }

    fn info(&self, category: &str, message: &str) {
        self.log(LogLevel::Info, category, message);
    }

    fn warn(&self, category: &str, message: &str) {
        self.log(LogLevel::Warn, category, message);
    }

    fn error(&self, category: &str, message: &str) {
        self.log(LogLevel::Error, category, message);
    }
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn log(&self, level: LogLevel, category: &str, message: &str) {
        (**self).log(level, category, message);
    }
}

impl<T: LogSink + ?Sized> LogSink for Rc<T> {
    fn log(&self, level: LogLevel, category: &str, message: &str) {
        (**self).log(level, category, message);
    }
}

/// Prints messages to the terminal with a timestamp and a category tag.
///
/// Debug and info messages go to stdout, warnings and errors to stderr.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleLogger {
    level: LogLevel,
}

impl ConsoleLogger {
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    fn format_line(level: LogLevel, category: &str, message: &str) -> String {
        let time = Local::now().format("%H:%M:%S").to_string();
        let tag = format!("[{category}]");
        let tag = match level {
            LogLevel::Debug => tag.blue(),
            LogLevel::Info => tag.cyan(),
            LogLevel::Warn => tag.yellow(),
            LogLevel::Error | LogLevel::Silent => tag.red(),
        };

        format!("{} {} {message}", time.dimmed(), tag.bold())
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl LogSink for ConsoleLogger {
    fn log(&self, level: LogLevel, category: &str, message: &str) {
        if level < self.level || level == LogLevel::Silent {
            return;
        }

        let line = Self::format_line(level, category, message);

        // A closed pipe must not turn a successful run into a failure
        let _ = match level {
            LogLevel::Debug | LogLevel::Info => writeln!(std::io::stdout(), "{line}"),
            LogLevel::Warn | LogLevel::Error | LogLevel::Silent => {
                writeln!(std::io::stderr(), "{line}")
            }
        };
    }
}

/// A single recorded message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub category: String,
    pub message: String,
}

/// Keeps every message in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: RefCell<Vec<LogEntry>>,
}

impl MemoryLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages recorded so far.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl LogSink for MemoryLogger {
    fn log(&self, level: LogLevel, category: &str, message: &str) {
        self.entries.borrow_mut().push(LogEntry {
            level,
            category: category.to_string(),
            message: message.to_string(),
        });
    }
}

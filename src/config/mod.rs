//! Configuration types and options for the application.
//!
//! This module contains all configuration structures used throughout the application,
//! including the project layout handed to the writer, execution options, and the
//! persistent configuration file.

pub mod execution;
pub mod file;
pub mod project;

pub use execution::ExecutionOptions;
pub use file::FileConfig;
pub use project::{DEFAULT_CACHE_DIR, DEFAULT_SRC_DIR, Integration, ProjectConfig};

//! Utility functions and helpers.
//!
//! This module contains utility functions used throughout the application,
//! such as lexical path manipulation helpers.

pub mod path;

pub use path::{normalize_slashes, relative_path};

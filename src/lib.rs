//! # inject-env-ts
//!
//! Makes sure an Astro project has a `src/env.d.ts` ambient declaration file
//! that references the framework client types and, once they have been
//! generated, the content collection types.
//!
//! This library provides the core functionality for the inject-env-ts CLI tool,
//! and can be embedded in other build tooling through the [`plugin`] module.

pub mod cli;
pub mod config;
pub mod content;
pub mod env_ts;
pub mod fs;
pub mod logger;
pub mod output;
pub mod plugin;
pub mod reference;
pub mod utils;

use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::{
        DEFAULT_CACHE_DIR, DEFAULT_SRC_DIR, ExecutionOptions, FileConfig, ProjectConfig,
        file::expand_tilde,
    },
    logger::LogLevel,
};

#[derive(Parser)]
struct LayoutArgs {
    /// Source directory holding env.d.ts, relative to the project root [default: src]
    #[arg(long)]
    src_dir: Option<PathBuf>,

    /// Directory of the generated content types, relative to the project root [default: .astro]
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Installed integration (repeatable), e.g. `@astrojs/image`
    #[arg(short = 'I', long = "integration", action = clap::ArgAction::Append)]
    integrations: Vec<String>,
}

#[derive(Parser)]
struct ExecutionArgs {
    /// Show what would be written without touching the disk
    #[arg(long)]
    dry_run: bool,

    /// Output results as a single JSON object
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct VerbosityArgs {
    /// Don't print anything except errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print debug messages
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,
}

#[derive(Parser)]
#[command(name = "inject-env-ts")]
#[command(about = "Ensure an Astro project has an env.d.ts referencing its client and content types")]
pub struct Cli {
    /// The project root directory [default: .]
    dir: Option<PathBuf>,

    /// Project layout
    #[command(flatten)]
    layout: LayoutArgs,

    /// Execution options
    #[command(flatten)]
    execution: ExecutionArgs,

    /// Verbosity options
    #[command(flatten)]
    verbosity: VerbosityArgs,
}

impl Cli {
    /// Project root: CLI argument, then config file, then the current directory.
    #[must_use]
    pub fn directory(&self, file_config: &FileConfig) -> PathBuf {
        self.dir
            .clone()
            .or_else(|| file_config.root.as_deref().map(expand_tilde))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    #[must_use]
    pub fn project_config(&self, file_config: &FileConfig) -> ProjectConfig {
        let src_dir = self
            .layout
            .src_dir
            .clone()
            .or_else(|| file_config.src_dir.as_deref().map(expand_tilde))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SRC_DIR));

        let cache_dir = self
            .layout
            .cache_dir
            .clone()
            .or_else(|| file_config.cache_dir.as_deref().map(expand_tilde))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR));

        let integrations = if self.layout.integrations.is_empty() {
            file_config.integrations.clone().unwrap_or_default()
        } else {
            self.layout.integrations.clone()
        };

        ProjectConfig::new(self.directory(file_config))
            .with_src_dir(src_dir)
            .with_cache_dir(cache_dir)
            .with_integrations(integrations)
    }

    #[must_use]
    pub fn execution_options(&self, file_config: &FileConfig) -> ExecutionOptions {
        let log_level = if self.verbosity.quiet {
            LogLevel::Silent
        } else if self.verbosity.verbose {
            LogLevel::Debug
        } else {
            file_config.execution.log_level.unwrap_or(LogLevel::Info)
        };

        ExecutionOptions {
            dry_run: self.execution.dry_run || file_config.execution.dry_run.unwrap_or(false),
            json: self.execution.json || file_config.execution.json.unwrap_or(false),
            log_level,
        }
    }
}

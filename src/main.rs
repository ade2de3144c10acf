//! # inject-env-ts
//!
//! Ensures an Astro project has a `src/env.d.ts` file referencing the framework
//! client types and the generated content collection types.
//!
//! ## Features
//!
//! - Creates `env.d.ts` with the right client types for the installed integrations
//! - Adds the content collection reference once `.astro/` has been generated
//! - Never rewrites a file that is already correct
//! - Dry-run mode for safe previewing
//! - JSON output for scripting
//! - Persistent configuration via `~/.config/inject-env-ts/config.toml`
//!
//! ## Usage
//!
//! ```bash
//! # Current directory
//! inject-env-ts
//!
//! # Another project, with the image integration installed
//! inject-env-ts ~/sites/blog --integration @astrojs/image
//!
//! # Preview only
//! inject-env-ts --dry-run
//! ```

use std::{path::PathBuf, process::exit, rc::Rc};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use inject_env_ts::{
    cli::Cli,
    config::FileConfig,
    env_ts::{EnvTsOutcome, env_ts_path},
    fs::{DryRunFs, RealFs},
    logger::{ConsoleLogger, LogLevel, LogSink, MemoryLogger},
    output::JsonOutput,
    plugin::{InjectEnvTsPlugin, run_config_hooks},
    utils::{normalize_slashes, relative_path},
};

/// Entry point for the inject-env-ts application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err:#}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Loads the persistent configuration file (if present)
/// 3. Resolves the project layout
/// 4. Runs the env.d.ts plugin's config hook, against the real disk or a dry-run recorder
/// 5. Reports the result as log lines, a dry-run summary, or a JSON document
///
/// # Errors
///
/// This function can return errors from:
/// - Reading the existing `env.d.ts`
/// - Creating the source directory
/// - Writing `env.d.ts`
/// - JSON serialization
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let file_config = match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        }
    };

    let execution = args.execution_options(&file_config);
    let project = args.project_config(&file_config);

    // Keep ANSI codes out of machine-readable output
    if execution.json {
        colored::control::set_override(false);
    }

    let run_memory = MemoryLogger::new();
    let plugin_memory = Rc::new(MemoryLogger::new());
    let console = Rc::new(ConsoleLogger::new(execution.log_level));
    let main_log: &dyn LogSink = if execution.json {
        &run_memory
    } else {
        console.as_ref()
    };

    // In dry-run mode the plugin's "Added ..." messages describe writes that
    // never happen, so they are collected instead of printed
    let plugin_log: Rc<dyn LogSink> = if execution.json || execution.dry_run {
        Rc::clone(&plugin_memory) as Rc<dyn LogSink>
    } else {
        Rc::clone(&console) as Rc<dyn LogSink>
    };

    main_log.debug(
        "config",
        &format!("Source directory: {}", project.src_dir.display()),
    );
    main_log.debug(
        "config",
        &format!("Cache directory: {}", project.cache_dir.display()),
    );

    let display_path = normalize_slashes(&relative_path(
        &project.root,
        &env_ts_path(&project.src_dir),
    ));

    let (outcome, planned_dirs) = if execution.dry_run {
        let mut plugin = InjectEnvTsPlugin::new(project, plugin_log, DryRunFs::new(RealFs));
        run_config_hooks(&mut [&mut plugin])?;

        let outcome = plugin
            .last_outcome()
            .cloned()
            .context("env.d.ts plugin did not run")?;
        (outcome, plugin.fs().planned_dirs())
    } else {
        let mut plugin = InjectEnvTsPlugin::new(project, plugin_log, RealFs);
        run_config_hooks(&mut [&mut plugin])?;

        let outcome = plugin
            .last_outcome()
            .cloned()
            .context("env.d.ts plugin did not run")?;
        (outcome, Vec::new())
    };

    main_log.debug(
        "astro",
        &format!("{display_path}: {}", outcome.action()),
    );

    if execution.json {
        let output = JsonOutput::new(display_path, &outcome, execution.dry_run, execution.log_level)
            .with_messages(run_memory.entries())
            .with_plugin_messages(plugin_memory.entries());
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if execution.dry_run && execution.log_level < LogLevel::Silent {
        print_dry_run_summary(&display_path, &outcome, &planned_dirs);
    }

    Ok(())
}

/// Print what a dry run would have changed.
fn print_dry_run_summary(display_path: &str, outcome: &EnvTsOutcome, planned_dirs: &[PathBuf]) {
    match outcome {
        EnvTsOutcome::Created { contents } | EnvTsOutcome::Updated { contents } => {
            for dir in planned_dirs {
                println!("  📁 Would create {}", dir.display().to_string().bright_white());
            }
            println!(
                "{} {}",
                "🧪 Dry run complete!".yellow(),
                format!("Would write {}:", display_path.bold()).bright_white()
            );
            for line in contents.lines() {
                println!("  {}", line.dimmed());
            }
        }
        EnvTsOutcome::Unchanged => {
            println!("{}", format!("✨ {display_path} is up to date").green());
        }
        EnvTsOutcome::Skipped => {
            println!(
                "{}",
                format!("✨ {display_path} exists and no content types have been generated yet")
                    .green()
            );
        }
    }
}

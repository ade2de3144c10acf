//! Build plugin wrapper around the `env.d.ts` writer.
//!
//! Plugins expose a `config` hook that runs once per configuration pass.
//! [`run_config_hooks`] runs them in `enforce` order, so a `Post` plugin such
//! as [`InjectEnvTsPlugin`] only runs after every other plugin had a chance
//! to generate its files (e.g. the content types in `.astro/`).

use anyhow::{Context, Result};

use crate::{
    config::ProjectConfig,
    content::{ContentPathResolver, DotAstroResolver},
    env_ts::{EnvTsOutcome, set_up_env_ts},
    fs::FileSystem,
    logger::LogSink,
};

/// Name under which [`InjectEnvTsPlugin`] registers.
pub const PLUGIN_NAME: &str = "astro-inject-env-ts";

/// Phase a plugin's hooks run in, relative to other plugins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Enforce {
    Pre,
    #[default]
    Normal,
    Post,
}

/// A build plugin with a configuration hook.
pub trait Plugin {
    fn name(&self) -> &str;

    fn enforce(&self) -> Enforce {
        Enforce::Normal
    }

    /// Called once per configuration pass.
    ///
    /// # Errors
    ///
    /// Any error aborts the configuration pass.
    fn config(&mut self) -> Result<()>;
}

/// Run every plugin's `config` hook, `Pre` plugins first and `Post` plugins
/// last. Plugins in the same phase keep their registration order.
///
/// # Errors
///
/// Stops at the first failing hook and returns its error, tagged with the
/// plugin name.
pub fn run_config_hooks(plugins: &mut [&mut dyn Plugin]) -> Result<()> {
    let mut order: Vec<usize> = (0..plugins.len()).collect();
    order.sort_by_key(|&i| plugins[i].enforce());

    for i in order {
        let plugin = &mut plugins[i];
        let name = plugin.name().to_string();
        plugin
            .config()
            .with_context(|| format!("Plugin {name} failed in config hook"))?;
    }

    Ok(())
}

/// Ensures `env.d.ts` exists once the project configuration is final.
pub struct InjectEnvTsPlugin<L, F, R = DotAstroResolver> {
    settings: ProjectConfig,
    logger: L,
    fs: F,
    resolver: R,
    last_outcome: Option<EnvTsOutcome>,
}

impl<L: LogSink, F: FileSystem> InjectEnvTsPlugin<L, F> {
    /// Create the plugin with the default content path resolver.
    pub fn new(settings: ProjectConfig, logger: L, fs: F) -> Self {
        Self {
            settings,
            logger,
            fs,
            resolver: DotAstroResolver,
            last_outcome: None,
        }
    }
}

impl<L, F, R> InjectEnvTsPlugin<L, F, R> {
    /// Swap the content path resolver.
    pub fn with_resolver<R2: ContentPathResolver>(self, resolver: R2) -> InjectEnvTsPlugin<L, F, R2> {
        InjectEnvTsPlugin {
            settings: self.settings,
            logger: self.logger,
            fs: self.fs,
            resolver,
            last_outcome: self.last_outcome,
        }
    }

    pub const fn settings(&self) -> &ProjectConfig {
        &self.settings
    }

    pub const fn fs(&self) -> &F {
        &self.fs
    }

    /// Outcome of the most recent `config` hook, `None` before the first run.
    pub const fn last_outcome(&self) -> Option<&EnvTsOutcome> {
        self.last_outcome.as_ref()
    }
}

impl<L, F, R> Plugin for InjectEnvTsPlugin<L, F, R>
where
    L: LogSink,
    F: FileSystem,
    R: ContentPathResolver,
{
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    // `.astro` types must already be written when this runs
    fn enforce(&self) -> Enforce {
        Enforce::Post
    }

    fn config(&mut self) -> Result<()> {
        let outcome = set_up_env_ts(&self.settings, &self.resolver, &self.logger, &self.fs)?;
        self.last_outcome = Some(outcome);
        Ok(())
    }
}

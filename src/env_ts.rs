//! Creation and patching of the `env.d.ts` ambient declaration file.
//!
//! [`set_up_env_ts`] makes sure `<src_dir>/env.d.ts` exists and references the
//! client types and, once the content cache directory has been generated, the
//! content collection types.
//!
//! Decision tree:
//!
//! - file exists, cache dir missing: nothing to do
//! - file exists, content directive missing: prepend it
//! - file exists, content directive present: nothing to do
//! - file missing: write the client directive, plus the content directive when
//!   the cache dir exists

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;

use crate::{
    config::ProjectConfig,
    content::ContentPathResolver,
    fs::FileSystem,
    logger::LogSink,
    reference::client_types_directive,
    utils::{normalize_slashes, relative_path},
};

/// Name of the ambient declaration file inside the source directory.
pub const ENV_TS_FILE: &str = "env.d.ts";

/// What a call to [`set_up_env_ts`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnvTsOutcome {
    /// The file did not exist and was written with these contents
    Created { contents: String },

    /// The content directive was prepended; these are the new contents
    Updated { contents: String },

    /// The file already referenced the content types
    Unchanged,

    /// The file exists but the cache directory does not, so there was nothing to add
    Skipped,
}

impl EnvTsOutcome {
    /// Short lowercase label, used in JSON output.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Updated { .. } => "updated",
            Self::Unchanged => "unchanged",
            Self::Skipped => "skipped",
        }
    }

    /// Contents written (or planned) by this call, if any.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        match self {
            Self::Created { contents } | Self::Updated { contents } => Some(contents),
            Self::Unchanged | Self::Skipped => None,
        }
    }

    #[must_use]
    pub const fn wrote(&self) -> bool {
        matches!(self, Self::Created { .. } | Self::Updated { .. })
    }
}

/// Path of the declaration file for a source directory.
#[must_use]
pub fn env_ts_path(src_dir: &Path) -> PathBuf {
    src_dir.join(ENV_TS_FILE)
}

/// Ensure `env.d.ts` exists under the source directory and references the
/// required types.
///
/// # Arguments
///
/// * `config` - Project layout and installed integrations
/// * `resolver` - Supplies the cache directory and the content types directive
/// * `logger` - Receives one `Added <path> types` message per write
/// * `fs` - File system the file is read from and written to
///
/// # Returns
///
/// The [`EnvTsOutcome`] describing what happened. Repeated calls against an
/// already-correct file return [`EnvTsOutcome::Unchanged`] without writing.
///
/// # Errors
///
/// Any file system failure (reading the existing file, creating the source
/// directory, writing the file) is returned as-is. Nothing is retried.
pub fn set_up_env_ts<R, L, F>(
    config: &ProjectConfig,
    resolver: &R,
    logger: &L,
    fs: &F,
) -> Result<EnvTsOutcome>
where
    R: ContentPathResolver + ?Sized,
    L: LogSink + ?Sized,
    F: FileSystem + ?Sized,
{
    let env_ts = env_ts_path(&config.src_dir);
    let cache_dir = resolver.content_paths(config).cache_dir;
    let type_reference = resolver.type_reference(config);
    let display_path = normalize_slashes(&relative_path(&config.root, &env_ts));

    if fs.exists(&env_ts) {
        if !fs.exists(&cache_dir) {
            return Ok(EnvTsOutcome::Skipped);
        }

        let contents = fs.read_to_string(&env_ts)?;
        if contents.contains(&type_reference) {
            return Ok(EnvTsOutcome::Unchanged);
        }

        let contents = format!("{type_reference}\n{contents}");
        fs.write(&env_ts, &contents)?;
        logger.info("content", &format!("Added {} types", display_path.bold()));

        return Ok(EnvTsOutcome::Updated { contents });
    }

    let mut reference_defs = vec![client_types_directive(config).to_string()];
    if fs.exists(&cache_dir) {
        reference_defs.push(type_reference);
    }

    let contents = reference_defs.join("\n");
    fs.create_dir_all(&config.src_dir)?;
    fs.write(&env_ts, &contents)?;
    logger.info("astro", &format!("Added {} types", display_path.bold()));

    Ok(EnvTsOutcome::Created { contents })
}

//! Project layout consumed by the `env.d.ts` writer.
//!
//! A [`ProjectConfig`] is owned by whoever drives the configuration pass; the
//! writer only reads it.

use std::path::{Path, PathBuf};

/// Source directory used when none is configured, relative to the root.
pub const DEFAULT_SRC_DIR: &str = "src";

/// Generated-content cache directory used when none is configured, relative to the root.
pub const DEFAULT_CACHE_DIR: &str = ".astro";

/// An installed integration, identified by its package name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Integration {
    /// Package name, e.g. `@astrojs/image`
    pub name: String,
}

impl Integration {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Resolved project layout.
///
/// All paths are stored resolved: `src_dir` and `cache_dir` are either
/// absolute or already joined onto `root`.
#[derive(Clone, Debug)]
pub struct ProjectConfig {
    /// Project root directory
    pub root: PathBuf,

    /// Source directory, where `env.d.ts` lives
    pub src_dir: PathBuf,

    /// Installed integrations, in configuration order
    pub integrations: Vec<Integration>,

    /// Directory holding the generated content collection types
    pub cache_dir: PathBuf,
}

impl ProjectConfig {
    /// Create a configuration rooted at `root` with the default source and
    /// cache directories and no integrations.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();

        Self {
            src_dir: root.join(DEFAULT_SRC_DIR),
            cache_dir: root.join(DEFAULT_CACHE_DIR),
            integrations: Vec::new(),
            root,
        }
    }

    /// Set the source directory. Relative paths are resolved against the root.
    #[must_use]
    pub fn with_src_dir(mut self, src_dir: impl AsRef<Path>) -> Self {
        self.src_dir = resolve_against(&self.root, src_dir.as_ref());
        self
    }

    /// Set the cache directory. Relative paths are resolved against the root.
    #[must_use]
    pub fn with_cache_dir(mut self, cache_dir: impl AsRef<Path>) -> Self {
        self.cache_dir = resolve_against(&self.root, cache_dir.as_ref());
        self
    }

    /// Replace the integration list.
    #[must_use]
    pub fn with_integrations<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.integrations = names.into_iter().map(Integration::new).collect();
        self
    }

    /// Whether an integration with exactly this name is configured.
    #[must_use]
    pub fn has_integration(&self, name: &str) -> bool {
        self.integrations.iter().any(|i| i.name == name)
    }
}

fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_layout() {
        let config = ProjectConfig::new("/site");

        assert_eq!(config.root, PathBuf::from("/site"));
        assert_eq!(config.src_dir, PathBuf::from("/site/src"));
        assert_eq!(config.cache_dir, PathBuf::from("/site/.astro"));
        assert!(config.integrations.is_empty());
    }

    #[test]
    fn test_relative_dirs_resolve_against_root() {
        let config = ProjectConfig::new("/site")
            .with_src_dir("app/src")
            .with_cache_dir("node_modules/.astro");

        assert_eq!(config.src_dir, PathBuf::from("/site/app/src"));
        assert_eq!(config.cache_dir, PathBuf::from("/site/node_modules/.astro"));
    }

    #[test]
    fn test_absolute_dirs_are_kept() {
        let config = ProjectConfig::new("/site")
            .with_src_dir("/elsewhere/src")
            .with_cache_dir("/tmp/cache");

        assert_eq!(config.src_dir, PathBuf::from("/elsewhere/src"));
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/cache"));
    }

    #[test]
    fn test_with_integrations_keeps_order() {
        let config =
            ProjectConfig::new("/site").with_integrations(["@astrojs/mdx", "@astrojs/image"]);

        assert_eq!(
            config.integrations,
            vec![
                Integration::new("@astrojs/mdx"),
                Integration::new("@astrojs/image")
            ]
        );
        assert!(config.has_integration("@astrojs/image"));
        assert!(!config.has_integration("@astrojs/react"));
    }
}

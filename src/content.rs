//! Locations of the generated content collection types.
//!
//! The content layer writes its generated declarations into a cache directory
//! (`.astro/` by default). The `env.d.ts` writer only needs to know where that
//! directory is and which reference directive points at the types inside it;
//! both come from a [`ContentPathResolver`].

use std::path::PathBuf;

use crate::{
    config::ProjectConfig,
    reference::path_directive,
    utils::{normalize_slashes, relative_path},
};

/// File name of the generated content types inside the cache directory.
pub const CONTENT_TYPES_FILE: &str = "types.d.ts";

/// Paths related to generated content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentPaths {
    /// Directory the generated content types are written to
    pub cache_dir: PathBuf,

    /// The generated declaration file inside `cache_dir`
    pub types_file: PathBuf,
}

/// Supplies the cache directory and the matching reference directive.
pub trait ContentPathResolver {
    fn content_paths(&self, config: &ProjectConfig) -> ContentPaths;

    /// The exact directive line that references the generated content types.
    fn type_reference(&self, config: &ProjectConfig) -> String;
}

impl<T: ContentPathResolver + ?Sized> ContentPathResolver for &T {
    fn content_paths(&self, config: &ProjectConfig) -> ContentPaths {
        (**self).content_paths(config)
    }

    fn type_reference(&self, config: &ProjectConfig) -> String {
        (**self).type_reference(config)
    }
}

/// Default resolver: content types live in `<cache_dir>/types.d.ts` and are
/// referenced by a path relative to the source directory.
#[derive(Clone, Copy, Debug, Default)]
pub struct DotAstroResolver;

impl ContentPathResolver for DotAstroResolver {
    fn content_paths(&self, config: &ProjectConfig) -> ContentPaths {
        ContentPaths {
            cache_dir: config.cache_dir.clone(),
            types_file: config.cache_dir.join(CONTENT_TYPES_FILE),
        }
    }

    fn type_reference(&self, config: &ProjectConfig) -> String {
        let types_file = self.content_paths(config).types_file;
        let relative = relative_path(&config.src_dir, &types_file);

        path_directive(&normalize_slashes(&relative))
    }
}

//! Path helpers.
//!
//! Paths are made absolute against the current directory and cleaned of `.`
//! and `..` components before being compared. Symlinks are not resolved and
//! nothing is required to exist on disk.

use std::path::{Component, Path, PathBuf};

/// Remove `.` components and fold `..` into the preceding component.
///
/// A `..` directly under the root stays at the root. A leading `..` in a
/// relative path is kept, since there is nothing to fold it into.
#[must_use]
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }

    cleaned
}

/// Absolute, cleaned form of `path`.
///
/// Relative paths are resolved against the current directory. If that fails
/// (e.g. the current directory was removed) the path is only cleaned.
#[must_use]
pub fn resolve_path(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    clean_path(&absolute)
}

/// Compute the path of `target` relative to `base`.
///
/// Both paths are resolved with [`resolve_path`] first, so `..` segments and
/// a mix of relative and absolute inputs are handled. The common leading
/// components are then dropped, every remaining component of `base` becomes a
/// `..`, and the remaining components of `target` are appended. Equal paths
/// produce an empty path. Paths on different prefixes (Windows drives) have
/// no relative form; the resolved target is returned as-is.
///
/// # Examples
///
/// ```
/// # use std::path::{Path, PathBuf};
/// # use inject_env_ts::utils::relative_path;
/// let rel = relative_path(Path::new("/site/src"), Path::new("/site/.astro/types.d.ts"));
/// assert_eq!(rel, PathBuf::from("../.astro/types.d.ts"));
/// ```
#[must_use]
pub fn relative_path(base: &Path, target: &Path) -> PathBuf {
    let base = resolve_path(base);
    let target = resolve_path(target);

    let base: Vec<Component<'_>> = base.components().collect();
    let target_components: Vec<Component<'_>> = target.components().collect();

    let common = base
        .iter()
        .zip(target_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    if common == 0 {
        return target.clone();
    }

    let mut relative = PathBuf::new();
    for _ in &base[common..] {
        relative.push("..");
    }
    for component in &target_components[common..] {
        relative.push(component.as_os_str());
    }

    relative
}

/// Render a path with forward slashes regardless of platform.
#[must_use]
pub fn normalize_slashes(path: &Path) -> String {
    let rendered = path.to_string_lossy();

    if cfg!(windows) {
        rendered.replace('\\', "/")
    } else {
        rendered.into_owned()
    }
}

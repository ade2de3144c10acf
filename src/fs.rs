//! File system capability used by the `env.d.ts` writer.
//!
//! The writer never calls `std::fs` directly; it goes through [`FileSystem`] so
//! that it can run against the real disk ([`RealFs`]) or record what it would
//! do without touching anything ([`DryRunFs`]). Unit tests use an in-memory
//! tree instead.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Minimal file system operations needed to manage `env.d.ts`.
pub trait FileSystem {
    /// Whether a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and all missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if any directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Read the whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Replace the file content with `contents`, creating the file if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        (**self).create_dir_all(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        (**self).read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        (**self).write(path, contents)
    }
}

/// The real file system.
#[derive(Clone, Copy, Debug, Default)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// A file write that a [`DryRunFs`] intercepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedWrite {
    pub path: PathBuf,
    pub contents: String,
}

/// Passes reads through to an inner file system and records writes instead
/// of performing them.
#[derive(Debug, Default)]
pub struct DryRunFs<F> {
    inner: F,
    planned_dirs: RefCell<Vec<PathBuf>>,
    planned_writes: RefCell<Vec<PlannedWrite>>,
}

impl<F: FileSystem> DryRunFs<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            planned_dirs: RefCell::new(Vec::new()),
            planned_writes: RefCell::new(Vec::new()),
        }
    }

    /// Directories that would have been created, in call order.
    #[must_use]
    pub fn planned_dirs(&self) -> Vec<PathBuf> {
        self.planned_dirs.borrow().clone()
    }

    /// Writes that would have been performed, in call order.
    #[must_use]
    pub fn planned_writes(&self) -> Vec<PlannedWrite> {
        self.planned_writes.borrow().clone()
    }
}

impl<F: FileSystem> FileSystem for DryRunFs<F> {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        if !self.inner.exists(path) {
            self.planned_dirs.borrow_mut().push(path.to_path_buf());
        }
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.inner.read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.planned_writes.borrow_mut().push(PlannedWrite {
            path: path.to_path_buf(),
            contents: contents.to_string(),
        });
        Ok(())
    }
}

/// In-memory file system for unit tests.
#[cfg(test)]
mod memory {
    use std::{
        cell::{Cell, RefCell},
        collections::{BTreeMap, BTreeSet},
        io::{Error, ErrorKind},
        path::{Path, PathBuf},
    };

    use anyhow::{Context, Result};

    use super::FileSystem;

    /// An in-memory directory tree.
    ///
    /// Writing a file requires its parent directory to exist, like on a real
    /// disk. Every successful write bumps [`MemoryFs::write_count`].
    #[derive(Debug, Default)]
    pub struct MemoryFs {
        dirs: RefCell<BTreeSet<PathBuf>>,
        files: RefCell<BTreeMap<PathBuf, String>>,
        writes: Cell<usize>,
        read_only: bool,
    }

    impl MemoryFs {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a directory (and its parents).
        #[must_use]
        pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
            self.insert_dir(path.as_ref());
            self
        }

        /// Add a file (and its parent directories) without counting it as a write.
        #[must_use]
        pub fn with_file(self, path: impl AsRef<Path>, contents: impl Into<String>) -> Self {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                self.insert_dir(parent);
            }
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), contents.into());
            self
        }

        /// Make every mutating operation fail with a permission error.
        #[must_use]
        pub fn read_only(mut self) -> Self {
            self.read_only = true;
            self
        }

        /// Current content of a file, if it exists.
        #[must_use]
        pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
            self.files.borrow().get(path.as_ref()).cloned()
        }

        #[must_use]
        pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
            self.dirs.borrow().contains(path.as_ref())
        }

        /// Number of successful writes since creation.
        #[must_use]
        pub fn write_count(&self) -> usize {
            self.writes.get()
        }

        fn insert_dir(&self, path: &Path) {
            let mut dirs = self.dirs.borrow_mut();
            for ancestor in path.ancestors() {
                if ancestor.as_os_str().is_empty() {
                    continue;
                }
                dirs.insert(ancestor.to_path_buf());
            }
        }

        fn ensure_writable(&self, path: &Path) -> Result<()> {
            if self.read_only {
                return Err(Error::new(ErrorKind::PermissionDenied, "read-only file system"))
                    .with_context(|| format!("Failed to write {}", path.display()));
            }
            Ok(())
        }
    }

    impl FileSystem for MemoryFs {
        fn exists(&self, path: &Path) -> bool {
            self.dirs.borrow().contains(path) || self.files.borrow().contains_key(path)
        }

        fn create_dir_all(&self, path: &Path) -> Result<()> {
            if self.files.borrow().contains_key(path) {
                return Err(Error::new(ErrorKind::AlreadyExists, "a file exists at this path"))
                    .with_context(|| format!("Failed to create directory {}", path.display()));
            }
            if self.is_dir(path) {
                return Ok(());
            }
            self.ensure_writable(path)?;
            self.insert_dir(path);
            Ok(())
        }

        fn read_to_string(&self, path: &Path) -> Result<String> {
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| Error::new(ErrorKind::NotFound, "no such file"))
                .with_context(|| format!("Failed to read {}", path.display()))
        }

        fn write(&self, path: &Path, contents: &str) -> Result<()> {
            self.ensure_writable(path)?;

            let parent_exists = path
                .parent()
                .is_none_or(|p| p.as_os_str().is_empty() || self.is_dir(p));
            if !parent_exists {
                return Err(Error::new(ErrorKind::NotFound, "parent directory does not exist"))
                    .with_context(|| format!("Failed to write {}", path.display()));
            }

            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), contents.to_string());
            self.writes.set(self.writes.get() + 1);
            Ok(())
        }
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryFs;

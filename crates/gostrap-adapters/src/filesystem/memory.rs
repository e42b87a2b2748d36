//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use gostrap_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{GostrapError, GostrapResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to the assembler and
/// inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    fail_on_write: Option<usize>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the `n`th `write_file` call (1-based) fail with a filesystem error.
    pub fn failing_on_write(n: usize) -> Self {
        let fs = Self::new();
        if let Ok(mut inner) = fs.inner.write() {
            inner.fail_on_write = Some(n);
        }
        fs
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All written files, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All known directories, sorted by path.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> GostrapResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| lock_poisoned())
    }

    fn write(&self) -> GostrapResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| lock_poisoned())
    }
}

impl MemoryFilesystemInner {
    fn insert_ancestors(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> GostrapResult<()> {
        let mut inner = self.write()?;
        if inner.files.contains_key(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "a file already exists at this path".into(),
            }
            .into());
        }
        inner.insert_ancestors(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> GostrapResult<()> {
        let mut inner = self.write()?;
        inner.writes += 1;
        if inner.fail_on_write == Some(inner.writes) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "injected write failure".into(),
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            inner.insert_ancestors(parent);
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

fn lock_poisoned() -> GostrapError {
    GostrapError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

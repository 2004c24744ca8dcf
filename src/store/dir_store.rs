//! This module provides a resource store backed by a real directory on the host system.
//! It flattens the directory tree into dotted resource names the same way build tools name
//! files they embed, so a provider can serve the same names from disk during development.
//!
//! ### Key Features:
//! - **One-time index**: The tree under `root` is walked once, at construction.
//! - **Flat naming**: `assets/icon.png` becomes `assets.icon.png`, optionally behind a namespace.
//! - **Hidden entries skipped**: Files and directories whose name starts with `.` are ignored.
//! - **Lazy reads**: File content is only read from disk when a stream is opened.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::{DirEntry, WalkDir};

use crate::core::ResourceStore;
use crate::error::{Error, Result};
use crate::store::ResourceStream;

/// A [`ResourceStore`] whose resources are the regular files below a host directory.
///
/// ### Usage notes:
/// - Files added under `root` after construction are not visible; the index is a snapshot.
/// - A file removed after construction still appears in `names()` and `contains()`, but
///   `open()` fails with an IO error.
/// - Symlinks are not followed.
///
/// ### Example:
/// ```no_run
/// use vfs_embedded::{DirStore, ResourceStore};
///
/// // `/srv/assets/img/logo.png` is exposed as `MyLib.img.logo.png`
/// let store = DirStore::with_namespace("/srv/assets", "MyLib").unwrap();
/// assert!(store.contains("MyLib.img.logo.png"));
/// ```
pub struct DirStore {
    root: PathBuf,                     // host-related canonical path
    entries: BTreeMap<String, PathBuf>, // resource name -> host path
}

impl DirStore {
    /// Indexes every regular file below `root` without a namespace.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        Self::with_namespace(root, "")
    }

    /// Indexes every regular file below `root`, naming each `namespace.<flattened path>`.
    /// An empty `namespace` adds no prefix.
    /// `root` must exist and be a directory.
    pub fn with_namespace<P: AsRef<Path>>(root: P, namespace: &str) -> Result<Self> {
        let root = root.as_ref();

        if root.as_os_str().is_empty() {
            return Err(Error::InvalidArgument("invalid root path: empty".to_string()));
        }
        if !root.is_dir() {
            return Err(Error::InvalidArgument(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let root = root.canonicalize()?;
        let prefix = if namespace.is_empty() {
            String::new()
        } else {
            format!("{namespace}.")
        };

        let mut entries = BTreeMap::new();
        let walker = WalkDir::new(&root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e));
        for entry in walker {
            let entry = entry.with_context(|| format!("failed to index {}", root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&root)
                .with_context(|| format!("{} is outside of the root", entry.path().display()))?;
            let name = format!("{prefix}{}", flatten(relative));
            log::trace!("Resource indexed: {} -> {:?}", name, entry.path());
            entries.insert(name, entry.into_path());
        }

        log::debug!("Indexed {} resources under {:?}", entries.len(), root);

        Ok(Self { root, entries })
    }

    /// Returns the canonical host path the store was built from.
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceStore for DirStore {
    fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn open(&self, name: &str) -> Result<ResourceStream> {
        let path = self
            .entries
            .get(name)
            .ok_or_else(|| Error::ResourceNotFound(name.to_string()))?;
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        Ok(ResourceStream::new(file, len))
    }

    fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Joins the components of a relative path with `.`.
fn flatten(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join(".")
}

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::provider::{ChangeRegistration, DirectoryContents, FileEntry};
use crate::store::ResourceStream;

/// A read-only, flat key-value store of named byte blobs.
///
/// Names are fully qualified (`MyLib.assets.icon.png`) and compared exactly.
pub trait ResourceStore: Send + Sync {
    /// Checks whether a resource named `name` exists.
    fn contains(&self, name: &str) -> bool;

    /// Opens a fresh stream over the resource named `name`.
    fn open(&self, name: &str) -> Result<ResourceStream>;

    /// Returns every resource name held by the store, in the store's own order.
    fn names(&self) -> Vec<String>;
}

impl<S: ResourceStore + ?Sized> ResourceStore for Arc<S> {
    fn contains(&self, name: &str) -> bool {
        (**self).contains(name)
    }

    fn open(&self, name: &str) -> Result<ResourceStream> {
        (**self).open(name)
    }

    fn names(&self) -> Vec<String> {
        (**self).names()
    }
}

impl<S: ResourceStore + ?Sized> ResourceStore for &S {
    fn contains(&self, name: &str) -> bool {
        (**self).contains(name)
    }

    fn open(&self, name: &str) -> Result<ResourceStream> {
        (**self).open(name)
    }

    fn names(&self) -> Vec<String> {
        (**self).names()
    }
}

/// Metadata and content access for a single file returned by a [`FileProvider`].
///
/// Callers must check [`FileInfo::exists`] before relying on any other method.
pub trait FileInfo {
    fn exists(&self) -> bool;

    /// Length of the file content in bytes.
    fn length(&self) -> Result<u64>;

    /// Path on the host filesystem, if the file has one.
    fn physical_path(&self) -> Option<&Path>;

    fn name(&self) -> &str;

    fn last_modified(&self) -> DateTime<Utc>;

    fn is_directory(&self) -> bool;

    /// Opens a new readable stream owned by the caller.
    fn create_read_stream(&self) -> Result<ResourceStream>;
}

/// Signals changes to watched files.
pub trait ChangeToken: Send + Sync {
    fn has_changed(&self) -> bool;

    /// Whether registered callbacks are ever invoked proactively.
    fn active_change_callbacks(&self) -> bool;

    fn register_change_callback(&self, callback: Box<dyn FnOnce() + Send>) -> ChangeRegistration;
}

/// Read-only access to a tree of files.
///
/// `None` stands for an absent path. Lookups never fail for missing entries:
/// absence is reported through the `exists` flag of the result.
pub trait FileProvider {
    fn get_file_info(&self, subpath: Option<&str>) -> FileEntry;

    fn get_directory_contents(&self, subpath: Option<&str>) -> DirectoryContents;

    fn watch(&self, filter: &str) -> &'static dyn ChangeToken;
}

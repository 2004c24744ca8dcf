//! This module provides a file provider over a flat [`ResourceStore`].
//!
//! ### Naming
//!
//! A provider is scoped to a namespace inside the store. With the base namespace `MyLib`,
//! the request path `assets/icon.png` resolves to the resource `MyLib.assets.icon.png`:
//! the namespace prefix (`MyLib.`) is kept verbatim and every `/` or `\` after it is folded
//! into `.`. Names are matched exactly, with no case folding.
//!
//! ### Directories
//!
//! The store has no hierarchy, so neither does the provider. Only the root (`""`) can be
//! listed, and it lists every resource under the prefix, named with the prefix stripped.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::{ChangeToken, FileProvider, ResourceStore};
use crate::error::{Error, Result};
use crate::provider::{DirectoryContents, EmbeddedFile, FileEntry, NULL_CHANGE_TOKEN, NotFoundFile};

/// Modification time reported for every resource unless configured otherwise.
///
/// Embedded resources carry no reliable timestamp, so the latest representable instant
/// is used.
pub const UNKNOWN_LAST_MODIFIED: DateTime<Utc> = DateTime::<Utc>::MAX_UTC;

const SEPARATOR: char = '.';

/// Deserializable provider settings.
///
/// ```
/// use vfs_embedded::ProviderConfig;
///
/// let config: ProviderConfig = serde_json::from_str(r#"{ "base_namespace": "MyLib" }"#).unwrap();
/// assert_eq!(config.base_namespace.as_deref(), Some("MyLib"));
/// assert_eq!(config.last_modified, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Namespace the provider is scoped to. Empty or missing means the whole store.
    pub base_namespace: Option<String>,
    /// Replaces [`UNKNOWN_LAST_MODIFIED`] as the modification time of every file.
    pub last_modified: Option<DateTime<Utc>>,
}

/// A read-only [`FileProvider`] over resources embedded in a [`ResourceStore`].
///
/// The provider is immutable after construction and can be shared freely between threads.
/// Every lookup or listing returns fresh [`EmbeddedFile`]s; nothing is cached across calls.
///
/// ### Example
///
/// ```
/// use vfs_embedded::{EmbeddedFileProvider, FileInfo, MapStore};
///
/// let mut store = MapStore::new();
/// store.insert("MyLib.assets.icon.png", "PNG");
/// store.insert("MyLib.readme.txt", "Hello");
///
/// let provider = EmbeddedFileProvider::with_namespace(store, "MyLib");
///
/// let file = provider.get_file_info("readme.txt");
/// assert!(file.exists());
/// assert_eq!(file.length().unwrap(), 5);
///
/// assert!(!provider.get_file_info("missing.txt").exists());
///
/// let names: Vec<_> = provider
///     .get_directory_contents("")
///     .iter()
///     .map(|f| f.name().to_string())
///     .collect();
/// assert_eq!(names, ["assets.icon.png", "readme.txt"]);
/// ```
#[derive(Clone)]
pub struct EmbeddedFileProvider {
    store: Arc<dyn ResourceStore>,
    prefix: String, // empty, or base namespace + SEPARATOR
    last_modified: DateTime<Utc>,
}

impl EmbeddedFileProvider {
    /// Creates a provider over the whole store.
    pub fn new<S: ResourceStore + 'static>(store: S) -> Self {
        Self::from_parts(Arc::new(store), None, None)
    }

    /// Creates a provider scoped to `base_namespace`. `None` or `""` means the whole store.
    pub fn with_namespace<'a, S: ResourceStore + 'static>(
        store: S,
        base_namespace: impl Into<Option<&'a str>>,
    ) -> Self {
        Self::from_parts(Arc::new(store), base_namespace.into(), None)
    }

    /// Creates a provider from deserialized settings.
    pub fn from_config<S: ResourceStore + 'static>(store: S, config: &ProviderConfig) -> Self {
        Self::from_parts(
            Arc::new(store),
            config.base_namespace.as_deref(),
            config.last_modified,
        )
    }

    pub fn builder() -> EmbeddedFileProviderBuilder {
        EmbeddedFileProviderBuilder::default()
    }

    fn from_parts(
        store: Arc<dyn ResourceStore>,
        base_namespace: Option<&str>,
        last_modified: Option<DateTime<Utc>>,
    ) -> Self {
        let prefix = namespace_prefix(base_namespace);
        log::debug!("Embedded file provider created with prefix {:?}", prefix);
        Self {
            store,
            prefix,
            last_modified: last_modified.unwrap_or(UNKNOWN_LAST_MODIFIED),
        }
    }

    /// Returns the namespace prefix, including its trailing separator, or `""`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Looks up a single file. `None` and `""` are never found.
    ///
    /// Missing files are returned as [`FileEntry::NotFound`], never as errors.
    pub fn get_file_info<'a>(&self, subpath: impl Into<Option<&'a str>>) -> FileEntry {
        self.locate(subpath.into())
    }

    /// Lists a directory. Only the root, `""`, exists.
    pub fn get_directory_contents<'a>(
        &self,
        subpath: impl Into<Option<&'a str>>,
    ) -> DirectoryContents {
        self.list(subpath.into())
    }

    /// Embedded resources never change, so every filter gets the same inert token.
    pub fn watch(&self, _filter: &str) -> &'static dyn ChangeToken {
        &NULL_CHANGE_TOKEN
    }

    /// Builds the store key for `subpath`. The prefix itself is never rewritten.
    fn resolve(&self, subpath: &str) -> String {
        let mut name = String::with_capacity(self.prefix.len() + subpath.len());
        name.push_str(&self.prefix);
        name.extend(subpath.chars().map(|c| match c {
            '/' | '\\' => SEPARATOR,
            c => c,
        }));
        name
    }

    fn locate(&self, subpath: Option<&str>) -> FileEntry {
        let subpath = match subpath {
            Some(subpath) if !subpath.is_empty() => subpath,
            other => return NotFoundFile::new(other.unwrap_or_default()).into(),
        };

        let resource_path = self.resolve(subpath);
        let name = file_name(subpath);

        if !self.store.contains(&resource_path) {
            log::trace!("Resolved {:?} to missing resource {}", subpath, resource_path);
            return NotFoundFile::new(name).into();
        }

        log::trace!("Resolved {:?} to resource {}", subpath, resource_path);
        EmbeddedFile::new(
            Arc::clone(&self.store),
            resource_path,
            name.to_string(),
            self.last_modified,
        )
        .into()
    }

    fn list(&self, subpath: Option<&str>) -> DirectoryContents {
        if subpath != Some("") {
            return DirectoryContents::NotFound;
        }

        let names = self.store.names();
        let total = names.len();
        let entries: Vec<EmbeddedFile> = names
            .into_iter()
            .filter_map(|resource_path| {
                let name = resource_path.strip_prefix(self.prefix.as_str())?.to_string();
                log::trace!("Listed resource {} as {:?}", resource_path, name);
                Some(EmbeddedFile::new(
                    Arc::clone(&self.store),
                    resource_path,
                    name,
                    self.last_modified,
                ))
            })
            .collect();

        log::debug!(
            "Listed {} of {} resources under prefix {:?}",
            entries.len(),
            total,
            self.prefix
        );
        DirectoryContents::Listing(entries)
    }
}

impl FileProvider for EmbeddedFileProvider {
    fn get_file_info(&self, subpath: Option<&str>) -> FileEntry {
        self.locate(subpath)
    }

    fn get_directory_contents(&self, subpath: Option<&str>) -> DirectoryContents {
        self.list(subpath)
    }

    fn watch(&self, filter: &str) -> &'static dyn ChangeToken {
        EmbeddedFileProvider::watch(self, filter)
    }
}

impl fmt::Debug for EmbeddedFileProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedFileProvider")
            .field("prefix", &self.prefix)
            .field("last_modified", &self.last_modified)
            .finish_non_exhaustive()
    }
}

/// Step-by-step construction of an [`EmbeddedFileProvider`].
///
/// Unlike the plain constructors, the store is optional here until `build()`, which fails
/// with [`Error::InvalidArgument`] if none was given.
#[derive(Default)]
pub struct EmbeddedFileProviderBuilder {
    store: Option<Arc<dyn ResourceStore>>,
    base_namespace: Option<String>,
    last_modified: Option<DateTime<Utc>>,
}

impl EmbeddedFileProviderBuilder {
    pub fn store<S: ResourceStore + 'static>(self, store: S) -> Self {
        self.shared_store(Arc::new(store))
    }

    /// Uses a store that is already shared elsewhere.
    pub fn shared_store(mut self, store: Arc<dyn ResourceStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn base_namespace(mut self, base_namespace: impl Into<String>) -> Self {
        self.base_namespace = Some(base_namespace.into());
        self
    }

    pub fn last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    /// Applies every setting present in `config`; missing ones keep their current value.
    pub fn config(mut self, config: &ProviderConfig) -> Self {
        if let Some(base_namespace) = &config.base_namespace {
            self.base_namespace = Some(base_namespace.clone());
        }
        if let Some(last_modified) = config.last_modified {
            self.last_modified = Some(last_modified);
        }
        self
    }

    pub fn build(self) -> Result<EmbeddedFileProvider> {
        let store = self
            .store
            .ok_or_else(|| Error::InvalidArgument("a resource store is required".to_string()))?;
        Ok(EmbeddedFileProvider::from_parts(
            store,
            self.base_namespace.as_deref(),
            self.last_modified,
        ))
    }
}

fn namespace_prefix(base_namespace: Option<&str>) -> String {
    match base_namespace {
        Some(base) if !base.is_empty() => format!("{base}{SEPARATOR}"),
        _ => String::new(),
    }
}

/// Text after the last `/` or `\`, or all of `subpath`.
fn file_name(subpath: &str) -> &str {
    subpath
        .rfind(|c: char| c == '/' || c == '\\')
        .map_or(subpath, |pos| &subpath[pos + 1..])
}

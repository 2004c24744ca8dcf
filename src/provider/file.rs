use std::fmt;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;

use crate::core::{FileInfo, ResourceStore};
use crate::error::{Error, Result};
use crate::store::ResourceStream;

/// An existing resource, exposed as a file.
///
/// Nothing is read from the store until [`FileInfo::length`] or
/// [`FileInfo::create_read_stream`] is called. The length is computed at most once per
/// instance; clones carry over whatever has already been computed.
#[derive(Clone)]
pub struct EmbeddedFile {
    store: Arc<dyn ResourceStore>,
    resource_path: String,
    name: String,
    last_modified: DateTime<Utc>,
    length: OnceCell<u64>,
}

impl EmbeddedFile {
    pub(crate) fn new(
        store: Arc<dyn ResourceStore>,
        resource_path: String,
        name: String,
        last_modified: DateTime<Utc>,
    ) -> Self {
        Self {
            store,
            resource_path,
            name,
            last_modified,
            length: OnceCell::new(),
        }
    }

    /// Fully-qualified store key of this resource.
    pub(crate) fn resource_path(&self) -> &str {
        &self.resource_path
    }
}

impl FileInfo for EmbeddedFile {
    fn exists(&self) -> bool {
        true
    }

    fn length(&self) -> Result<u64> {
        self.length
            .get_or_try_init(|| {
                log::trace!("Measuring resource: {}", self.resource_path);
                let stream = self.store.open(&self.resource_path)?;
                Ok::<_, Error>(stream.len())
            })
            .copied()
    }

    fn physical_path(&self) -> Option<&Path> {
        None
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    fn is_directory(&self) -> bool {
        false
    }

    fn create_read_stream(&self) -> Result<ResourceStream> {
        let stream = self.store.open(&self.resource_path)?;
        self.length.get_or_init(|| stream.len());
        Ok(stream)
    }
}

impl fmt::Debug for EmbeddedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedFile")
            .field("name", &self.name)
            .field("resource_path", &self.resource_path)
            .field("last_modified", &self.last_modified)
            .field("length", &self.length.get())
            .finish()
    }
}

/// A file that does not exist. Carries only the requested name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundFile {
    name: String,
}

impl NotFoundFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FileInfo for NotFoundFile {
    fn exists(&self) -> bool {
        false
    }

    fn length(&self) -> Result<u64> {
        Err(Error::ResourceNotFound(self.name.clone()))
    }

    fn physical_path(&self) -> Option<&Path> {
        None
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn last_modified(&self) -> DateTime<Utc> {
        DateTime::<Utc>::MIN_UTC
    }

    fn is_directory(&self) -> bool {
        false
    }

    fn create_read_stream(&self) -> Result<ResourceStream> {
        Err(Error::ResourceNotFound(self.name.clone()))
    }
}

/// Result of a single-file lookup.
#[derive(Debug, Clone)]
pub enum FileEntry {
    Embedded(EmbeddedFile),
    NotFound(NotFoundFile),
}

impl FileEntry {
    pub fn as_embedded(&self) -> Option<&EmbeddedFile> {
        match self {
            Self::Embedded(file) => Some(file),
            Self::NotFound(_) => None,
        }
    }

    pub fn into_embedded(self) -> Option<EmbeddedFile> {
        match self {
            Self::Embedded(file) => Some(file),
            Self::NotFound(_) => None,
        }
    }

    fn as_file_info(&self) -> &dyn FileInfo {
        match self {
            Self::Embedded(file) => file,
            Self::NotFound(file) => file,
        }
    }
}

impl FileInfo for FileEntry {
    fn exists(&self) -> bool {
        self.as_file_info().exists()
    }

    fn length(&self) -> Result<u64> {
        self.as_file_info().length()
    }

    fn physical_path(&self) -> Option<&Path> {
        self.as_file_info().physical_path()
    }

    fn name(&self) -> &str {
        self.as_file_info().name()
    }

    fn last_modified(&self) -> DateTime<Utc> {
        self.as_file_info().last_modified()
    }

    fn is_directory(&self) -> bool {
        self.as_file_info().is_directory()
    }

    fn create_read_stream(&self) -> Result<ResourceStream> {
        self.as_file_info().create_read_stream()
    }
}

impl From<EmbeddedFile> for FileEntry {
    fn from(file: EmbeddedFile) -> Self {
        Self::Embedded(file)
    }
}

impl From<NotFoundFile> for FileEntry {
    fn from(file: NotFoundFile) -> Self {
        Self::NotFound(file)
    }
}

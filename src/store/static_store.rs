//! Resources compiled into the binary.

use crate::core::ResourceStore;
use crate::error::{Error, Result};
use crate::store::ResourceStream;

/// A single resource embedded at compile time.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedResource {
    /// Fully-qualified resource name (e.g. `"MyLib.assets.icon.png"`).
    pub name: &'static str,
    /// Resource content.
    pub data: &'static [u8],
}

/// A [`ResourceStore`] over a table of [`EmbeddedResource`]s that lives in the binary.
///
/// Enumeration follows the order of the table. Usually built with [`embedded_resources!`]:
///
/// ```ignore
/// use vfs_embedded::{embedded_resources, StaticStore};
///
/// static ASSETS: StaticStore = embedded_resources! {
///     "MyLib.readme.txt" => "../assets/readme.txt",
///     "MyLib.assets.icon.png" => "../assets/icon.png",
/// };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StaticStore {
    resources: &'static [EmbeddedResource],
}

impl StaticStore {
    pub const fn new(resources: &'static [EmbeddedResource]) -> Self {
        Self { resources }
    }

    /// Looks up resource content by its exact name.
    pub fn get(&self, name: &str) -> Option<&'static [u8]> {
        self.resources
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.data)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResourceStore for StaticStore {
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn open(&self, name: &str) -> Result<ResourceStream> {
        let data = self
            .get(name)
            .ok_or_else(|| Error::ResourceNotFound(name.to_string()))?;
        Ok(ResourceStream::from_bytes(data))
    }

    fn names(&self) -> Vec<String> {
        self.resources.iter().map(|r| r.name.to_string()).collect()
    }
}

/// Builds a [`StaticStore`] from `name => path` pairs, embedding each file with `include_bytes!`.
///
/// Paths are resolved the same way `include_bytes!` resolves them: relative to the file
/// containing the macro invocation.
#[macro_export]
macro_rules! embedded_resources {
    ($($name:expr => $path:expr),* $(,)?) => {
        $crate::StaticStore::new(&[
            $($crate::EmbeddedResource {
                name: $name,
                data: include_bytes!($path),
            }),*
        ])
    };
}

//! This module provides a resource store that keeps every resource in memory.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::ResourceStore;
use crate::error::{Error, Result};
use crate::store::ResourceStream;

/// An in-memory [`ResourceStore`] keyed by fully-qualified resource names.
///
/// `MapStore` is filled once (via `insert()`/`insert_bytes()` or `collect()`) and then handed
/// to a provider, which only reads from it. Useful for tests and for resources produced at
/// runtime rather than compiled in.
///
/// ### Internal state
///
/// * `resources`: flat map from resource name to content.
///   - Names are stored verbatim: no separator folding, no case folding.
///   - Uses `BTreeMap`, so `names()` enumerates in sorted, deterministic order.
///   - Contents are `Arc<[u8]>`, so opening a stream never copies the bytes.
///
/// ### Example
///
/// ```
/// use vfs_embedded::{MapStore, ResourceStore};
///
/// let mut store = MapStore::new();
/// store.insert("MyLib.readme.txt", "Hello");
///
/// assert!(store.contains("MyLib.readme.txt"));
/// assert!(!store.contains("mylib.readme.txt"));
/// ```
#[derive(Default, Clone)]
pub struct MapStore {
    resources: BTreeMap<String, Arc<[u8]>>,
}

impl MapStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a resource with string content, replacing any previous content under `name`.
    pub fn insert(&mut self, name: impl Into<String>, content: impl AsRef<str>) {
        self.insert_bytes(name, content.as_ref().as_bytes());
    }

    /// Inserts a resource with binary content, replacing any previous content under `name`.
    pub fn insert_bytes(&mut self, name: impl Into<String>, content: impl AsRef<[u8]>) {
        self.resources.insert(name.into(), Arc::from(content.as_ref()));
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl<K: Into<String>, V: AsRef<[u8]>> FromIterator<(K, V)> for MapStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (name, content) in iter {
            store.insert_bytes(name, content);
        }
        store
    }
}

impl ResourceStore for MapStore {
    fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    fn open(&self, name: &str) -> Result<ResourceStream> {
        let content = self
            .resources
            .get(name)
            .ok_or_else(|| Error::ResourceNotFound(name.to_string()))?;
        Ok(ResourceStream::from_bytes(Arc::clone(content)))
    }

    fn names(&self) -> Vec<String> {
        self.resources.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_store() -> MapStore {
        let mut store = MapStore::new();
        store.insert("MyLib.readme.txt", "Project docs");
        store.insert_bytes("MyLib.assets.icon.png", [0x89u8, b'P', b'N', b'G']);
        store.insert("Other.data.json", "{}");
        store
    }

    mod creations {
        use super::*;

        #[test]
        fn test_new_map_store_is_empty() {
            let store = MapStore::new();
            assert!(store.is_empty());
            assert_eq!(store.len(), 0);
            assert!(store.names().is_empty());
        }

        #[test]
        fn test_collect_from_pairs() {
            let store: MapStore = [("a.txt", b"A".as_slice()), ("b.txt", b"BB".as_slice())]
                .into_iter()
                .collect();
            assert_eq!(store.len(), 2);
            assert!(store.contains("a.txt"));
            assert!(store.contains("b.txt"));
        }

        #[test]
        fn test_insert_replaces_content() -> Result<()> {
            let mut store = MapStore::new();
            store.insert("a.txt", "first");
            store.insert("a.txt", "second");

            assert_eq!(store.len(), 1);
            assert_eq!(store.open("a.txt")?.read_all()?, b"second");
            Ok(())
        }
    }

    mod contains {
        use super::*;

        #[test]
        fn test_contains_exact_name() {
            let store = setup_test_store();
            assert!(store.contains("MyLib.readme.txt"));
            assert!(store.contains("MyLib.assets.icon.png"));
        }

        #[test]
        fn test_contains_is_case_sensitive() {
            let store = setup_test_store();
            assert!(!store.contains("mylib.readme.txt"));
            assert!(!store.contains("MyLib.README.txt"));
        }

        #[test]
        fn test_contains_does_not_fold_separators() {
            let store = setup_test_store();
            assert!(!store.contains("MyLib/readme.txt"));
            assert!(!store.contains("MyLib.assets"));
        }
    }

    mod open {
        use super::*;

        #[test]
        fn test_open_existing_resource() -> Result<()> {
            let store = setup_test_store();
            let stream = store.open("MyLib.readme.txt")?;
            assert_eq!(stream.len(), 12);
            assert_eq!(stream.read_all()?, b"Project docs");
            Ok(())
        }

        #[test]
        fn test_open_returns_fresh_stream_each_time() -> Result<()> {
            let store = setup_test_store();
            let first = store.open("MyLib.assets.icon.png")?.read_all()?;
            let second = store.open("MyLib.assets.icon.png")?.read_all()?;
            assert_eq!(first, second);
            assert_eq!(first.len(), 4);
            Ok(())
        }

        #[test]
        fn test_open_missing_resource() {
            let store = setup_test_store();
            let result = store.open("MyLib.missing.txt");
            assert!(matches!(result, Err(Error::ResourceNotFound(_))));
        }
    }

    mod names {
        use super::*;

        #[test]
        fn test_names_are_sorted() {
            let store = setup_test_store();
            assert_eq!(
                store.names(),
                vec!["MyLib.assets.icon.png", "MyLib.readme.txt", "Other.data.json"]
            );
        }
    }
}

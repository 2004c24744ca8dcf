use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::ResourceStore;
use crate::error::Result;
use crate::store::{MapStore, ResourceStream};

/// A [`MapStore`] that counts how often each store operation is called.
#[derive(Default)]
pub(crate) struct CountingStore {
    inner: MapStore,
    contains_calls: AtomicUsize,
    open_calls: AtomicUsize,
    names_calls: AtomicUsize,
}

impl CountingStore {
    pub(crate) fn new<'a>(resources: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            inner: resources
                .into_iter()
                .map(|(name, content)| (name, content.as_bytes()))
                .collect(),
            ..Default::default()
        }
    }

    pub(crate) fn contains_calls(&self) -> usize {
        self.contains_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn open_calls(&self) -> usize {
        self.open_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn names_calls(&self) -> usize {
        self.names_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.contains_calls() + self.open_calls() + self.names_calls()
    }
}

impl ResourceStore for CountingStore {
    fn contains(&self, name: &str) -> bool {
        self.contains_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.contains(name)
    }

    fn open(&self, name: &str) -> Result<ResourceStream> {
        self.open_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.open(name)
    }

    fn names(&self) -> Vec<String> {
        self.names_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.names()
    }
}

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

//! A read-only virtual file system over resources embedded in a binary.
//! Presents a flat, dotted resource namespace (`MyLib.assets.icon.png`) as one directory of
//! files, so code can ask for `assets/icon.png` without caring where the bytes live.
//!
//! ### Overview
//!
//! `vfs-embedded` resolves request paths against any [`ResourceStore`]: resources compiled in
//! with [`embedded_resources!`], an in-memory [`MapStore`], or a host directory flattened by
//! [`DirStore`]. [`EmbeddedFileProvider`] scopes itself to a namespace inside the store and
//! answers through the [`FileProvider`] protocol.
//!
//! **Key ideas**:
//! - **Flat namespace**: `/` and `\` in a request path fold into `.`; only the root directory exists.
//! - **Not found is not an error**: missing files and directories come back with `exists() == false`.
//! - **Lazy metadata**: nothing is read from the store until a length or stream is requested,
//!   and each file measures its length at most once.
//! - **Immutable**: providers are `Send + Sync` and never write to their store.
//!
//! ```
//! use vfs_embedded::{EmbeddedFileProvider, FileInfo, MapStore};
//!
//! let mut store = MapStore::new();
//! store.insert("MyLib.docs.intro.md", "# Intro");
//!
//! let provider = EmbeddedFileProvider::with_namespace(store, "MyLib");
//! let file = provider.get_file_info("docs/intro.md");
//!
//! assert!(file.exists());
//! assert_eq!(file.name(), "intro.md");
//! assert_eq!(file.create_read_stream().unwrap().read_all().unwrap(), b"# Intro");
//! ```

mod core;
mod error;
mod provider;
mod store;

pub use crate::core::{ChangeToken, FileInfo, FileProvider, ResourceStore};
pub use crate::error::{Error, Result};
pub use provider::{
    ChangeRegistration, DirectoryContents, EmbeddedFile, EmbeddedFileProvider,
    EmbeddedFileProviderBuilder, FileEntry, NULL_CHANGE_TOKEN, NotFoundFile, NullChangeToken,
    ProviderConfig, UNKNOWN_LAST_MODIFIED,
};
pub use store::{DirStore, EmbeddedResource, MapStore, ResourceStream, StaticStore};

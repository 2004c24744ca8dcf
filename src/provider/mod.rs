mod change_token;
mod contents;
mod embedded;
mod file;

#[cfg(test)]
pub(crate) mod testing;

pub use change_token::{ChangeRegistration, NULL_CHANGE_TOKEN, NullChangeToken};
pub use contents::DirectoryContents;
pub use embedded::{
    EmbeddedFileProvider, EmbeddedFileProviderBuilder, ProviderConfig, UNKNOWN_LAST_MODIFIED,
};
pub use file::{EmbeddedFile, FileEntry, NotFoundFile};

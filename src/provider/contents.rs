use std::slice;
use std::vec;

use crate::provider::EmbeddedFile;

/// Result of a directory listing.
#[derive(Debug, Clone)]
pub enum DirectoryContents {
    /// The directory exists; entries are in the order the store enumerated them.
    Listing(Vec<EmbeddedFile>),
    /// The requested directory does not exist.
    NotFound,
}

impl DirectoryContents {
    pub fn exists(&self) -> bool {
        matches!(self, Self::Listing(_))
    }

    /// Iterates over the entries. A missing directory yields nothing.
    pub fn iter(&self) -> slice::Iter<'_, EmbeddedFile> {
        self.as_slice().iter()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn as_slice(&self) -> &[EmbeddedFile] {
        match self {
            Self::Listing(entries) => entries,
            Self::NotFound => &[],
        }
    }
}

impl IntoIterator for DirectoryContents {
    type Item = EmbeddedFile;
    type IntoIter = vec::IntoIter<EmbeddedFile>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Listing(entries) => entries.into_iter(),
            Self::NotFound => Vec::new().into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a DirectoryContents {
    type Item = &'a EmbeddedFile;
    type IntoIter = slice::Iter<'a, EmbeddedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_empty() {
        let contents = DirectoryContents::NotFound;
        assert!(!contents.exists());
        assert!(contents.is_empty());
        assert_eq!(contents.len(), 0);
        assert_eq!(contents.into_iter().count(), 0);
    }

    #[test]
    fn test_empty_listing_exists() {
        let contents = DirectoryContents::Listing(Vec::new());
        assert!(contents.exists());
        assert!(contents.is_empty());
        assert_eq!((&contents).into_iter().count(), 0);
    }
}

use std::fmt;
use std::io::{Cursor, Read};

use crate::error::Result;

/// An owned, readable stream over one resource, with its total length known up front.
///
/// The stream belongs to whoever opened it; dropping it releases the underlying handle.
pub struct ResourceStream {
    reader: Box<dyn Read + Send>,
    len: u64,
}

impl ResourceStream {
    /// Wraps `reader`, which must yield exactly `len` bytes.
    pub fn new<R: Read + Send + 'static>(reader: R, len: u64) -> Self {
        Self {
            reader: Box::new(reader),
            len,
        }
    }

    /// Creates a stream over an in-memory buffer.
    pub fn from_bytes<B: AsRef<[u8]> + Send + 'static>(bytes: B) -> Self {
        let len = bytes.as_ref().len() as u64;
        Self::new(Cursor::new(bytes), len)
    }

    /// Total length of the resource in bytes, regardless of how much was already read.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads the remaining content into a vector.
    pub fn read_all(mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.len as usize);
        self.reader.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

impl Read for ResourceStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reader.read(buf)
    }
}

impl fmt::Debug for ResourceStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceStream").field("len", &self.len).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_reports_length() {
        let stream = ResourceStream::from_bytes(b"Hello".as_slice());
        assert_eq!(stream.len(), 5);
        assert!(!stream.is_empty());
        assert_eq!(stream.read_all().unwrap(), b"Hello");
    }

    #[test]
    fn test_length_is_independent_of_read_position() {
        let mut stream = ResourceStream::from_bytes(vec![1u8, 2, 3, 4]);
        let mut head = [0u8; 2];
        stream.read_exact(&mut head).unwrap();

        assert_eq!(head, [1, 2]);
        assert_eq!(stream.len(), 4);
        assert_eq!(stream.read_all().unwrap(), vec![3, 4]);
    }

    #[test]
    fn test_empty_stream() {
        let stream = ResourceStream::from_bytes(Vec::new());
        assert!(stream.is_empty());
        assert!(stream.read_all().unwrap().is_empty());
    }
}

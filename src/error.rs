use std::io;

/// An offset handed to a [`TextSource`](crate::TextSource) that does not
/// address a code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OffsetError {
    /// The offset lies past the end of the text.
    #[error("offset {offset} is out of bounds for text of length {len}")]
    OutOfBounds {
        /// The requested offset.
        offset: usize,
        /// Length of the text, in bytes.
        len: usize,
    },
    /// The offset lies inside a UTF-8 sequence.
    #[error("offset {offset} is not on a char boundary")]
    NotCharBoundary {
        /// The requested offset.
        offset: usize,
    },
}

/// Failure while decoding a byte stream with [`Utf8Reader`](crate::Utf8Reader).
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The stream contains bytes that are not valid UTF-8.
    #[error("invalid UTF-8 sequence at byte offset {offset}")]
    InvalidUtf8 {
        /// Offset of the first byte of the invalid sequence.
        offset: usize,
    },
}

use crate::{
    error::{OffsetError, ReadError},
    property_ty::{word_break_property, WordBreakProperty},
    utf8,
};
use std::{convert::Infallible, fmt, io, marker::PhantomData, str::CharIndices};

/// A forward-only reader yielding code points together with their byte offsets.
pub trait CharReader {
    /// Failure reported by the underlying storage.
    type Error;

    /// Returns the next code point and its offset, or `None` at end of text.
    fn next_char(&mut self) -> Result<Option<(usize, char)>, Self::Error>;
}

impl<R: CharReader + ?Sized> CharReader for &mut R {
    type Error = R::Error;

    fn next_char(&mut self) -> Result<Option<(usize, char)>, Self::Error> {
        (**self).next_char()
    }
}

/// Randomly addressable text that hands out forward readers.
///
/// The text must not change while a reader or a query is in flight.
pub trait TextSource {
    /// Failure reported by the storage, passed through to callers unchanged.
    type Error;

    /// Reader type returned by [`TextSource::reader_at`].
    type Reader<'a>: CharReader<Error = Self::Error>
    where
        Self: 'a;

    /// Length of the text, in bytes.
    fn len(&self) -> usize;

    /// Returns whether the text is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reader positioned at `offset`.
    fn reader_at(&self, offset: usize) -> Result<Self::Reader<'_>, Self::Error>;

    /// Returns the greatest position at or before `offset` from which a
    /// fresh word breaker reproduces the boundaries of a scan from the start
    /// of the text.
    ///
    /// That is the start of the text, or the position right after a CR, LF
    /// or Newline code point, except between the two halves of a CR LF pair.
    /// `offset` may fall inside a code point; offsets past the end behave like
    /// the end.
    ///
    /// The provided implementation scans forward from the start of the text.
    fn line_start(&self, offset: usize) -> Result<usize, Self::Error> {
        let mut reader = self.reader_at(0)?;
        let mut safe = 0;
        let mut after_cr = None;
        while let Some((at, ch)) = reader.next_char()? {
            if let Some(end) = after_cr.take() {
                if ch != '\n' {
                    safe = end;
                }
            }
            let end = at + ch.len_utf8();
            if end > offset {
                return Ok(safe);
            }
            match word_break_property(ch) {
                WordBreakProperty::CR => after_cr = Some(end),
                WordBreakProperty::LF | WordBreakProperty::Newline => safe = end,
                _ => {}
            }
        }
        Ok(after_cr.unwrap_or(safe))
    }
}

/// Reader over a string slice, offsetting every position by a fixed base.
///
/// Reading a string never fails; `E` only lets the reader stand in for
/// sources with their own error type.
pub struct StrReader<'a, E = Infallible> {
    base: usize,
    chars: CharIndices<'a>,
    marker: PhantomData<fn() -> E>,
}

impl<'a, E> StrReader<'a, E> {
    /// Creates a reader over `text`, reporting offsets relative to its start.
    pub fn new(text: &'a str) -> Self {
        Self::with_base(text, 0)
    }

    /// Creates a reader over `text`, reporting offsets starting at `base`.
    pub fn with_base(text: &'a str, base: usize) -> Self {
        StrReader {
            base,
            chars: text.char_indices(),
            marker: PhantomData,
        }
    }
}

impl<E> Clone for StrReader<'_, E> {
    fn clone(&self) -> Self {
        StrReader {
            base: self.base,
            chars: self.chars.clone(),
            marker: PhantomData,
        }
    }
}

impl<E> fmt::Debug for StrReader<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrReader")
            .field("base", &self.base)
            .field("rest", &self.chars.as_str())
            .finish()
    }
}

impl<E> CharReader for StrReader<'_, E> {
    type Error = E;

    fn next_char(&mut self) -> Result<Option<(usize, char)>, E> {
        Ok(self.chars.next().map(|(i, ch)| (self.base + i, ch)))
    }
}

fn offset_error(text: &str, offset: usize) -> OffsetError {
    if offset > text.len() {
        OffsetError::OutOfBounds {
            offset,
            len: text.len(),
        }
    } else {
        OffsetError::NotCharBoundary { offset }
    }
}

impl TextSource for str {
    type Error = OffsetError;
    type Reader<'a> = StrReader<'a, OffsetError>
    where
        Self: 'a;

    fn len(&self) -> usize {
        str::len(self)
    }

    fn reader_at(&self, offset: usize) -> Result<Self::Reader<'_>, OffsetError> {
        let tail = self
            .get(offset..)
            .ok_or_else(|| offset_error(self, offset))?;
        Ok(StrReader::with_base(tail, offset))
    }

    fn line_start(&self, offset: usize) -> Result<usize, OffsetError> {
        let at = floor_char_boundary(self, offset);
        let next_is_lf = self[at..].starts_with('\n');
        Ok(line_start_before(Some((0, &self[..at])), next_is_lf))
    }
}

fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut at = offset.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }
    at
}

/// Searches backwards for the end of the nearest line ending.
///
/// `pieces` holds the text before the position, as `(offset, text)` pairs in
/// reverse order. `next_is_lf` tells whether an LF follows the position, in
/// which case a CR right before it does not end a line.
fn line_start_before<'a>(
    pieces: impl IntoIterator<Item = (usize, &'a str)>,
    mut next_is_lf: bool,
) -> usize {
    for (base, piece) in pieces {
        for (i, ch) in piece.char_indices().rev() {
            match word_break_property(ch) {
                WordBreakProperty::LF | WordBreakProperty::Newline => {
                    return base + i + ch.len_utf8()
                }
                WordBreakProperty::CR if !next_is_lf => return base + i + 1,
                _ => {}
            }
            next_is_lf = false;
        }
    }
    0
}

/// Text stored as a sequence of chunks, the way a rope or piece table holds it.
///
/// Offsets are global byte offsets across all chunks. Chunk edges are always
/// code point boundaries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChunkedText {
    chunks: Vec<String>,
    starts: Vec<usize>,
    len: usize,
}

impl ChunkedText {
    /// Creates an empty text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk. Empty chunks are dropped.
    pub fn push_chunk(&mut self, chunk: impl Into<String>) {
        let chunk = chunk.into();
        if chunk.is_empty() {
            return;
        }
        self.starts.push(self.len);
        self.len += chunk.len();
        self.chunks.push(chunk);
    }

    /// Returns an iterator over the chunks, in order.
    pub fn chunks(&self) -> impl Iterator<Item = &str> + '_ {
        self.chunks.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ChunkedText {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut text = ChunkedText::new();
        for chunk in iter {
            text.push_chunk(chunk);
        }
        text
    }
}

impl fmt::Display for ChunkedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in &self.chunks {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

/// Reader over a [`ChunkedText`].
#[derive(Clone, Debug)]
pub struct ChunkedReader<'a> {
    text: &'a ChunkedText,
    chunk: usize,
    base: usize,
    chars: CharIndices<'a>,
}

impl CharReader for ChunkedReader<'_> {
    type Error = OffsetError;

    fn next_char(&mut self) -> Result<Option<(usize, char)>, OffsetError> {
        loop {
            if let Some((i, ch)) = self.chars.next() {
                return Ok(Some((self.base + i, ch)));
            }
            if self.chunk + 1 >= self.text.chunks.len() {
                return Ok(None);
            }
            self.chunk += 1;
            self.base = self.text.starts[self.chunk];
            self.chars = self.text.chunks[self.chunk].char_indices();
        }
    }
}

impl TextSource for ChunkedText {
    type Error = OffsetError;
    type Reader<'a> = ChunkedReader<'a>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn reader_at(&self, offset: usize) -> Result<ChunkedReader<'_>, OffsetError> {
        if offset > self.len {
            return Err(OffsetError::OutOfBounds {
                offset,
                len: self.len,
            });
        }
        if offset == self.len {
            return Ok(ChunkedReader {
                text: self,
                chunk: self.chunks.len(),
                base: offset,
                chars: "".char_indices(),
            });
        }
        let chunk = self.starts.partition_point(|&start| start <= offset) - 1;
        let start = self.starts[chunk];
        let tail = self.chunks[chunk]
            .get(offset - start..)
            .ok_or(OffsetError::NotCharBoundary { offset })?;
        Ok(ChunkedReader {
            text: self,
            chunk,
            base: offset,
            chars: tail.char_indices(),
        })
    }

    fn line_start(&self, offset: usize) -> Result<usize, OffsetError> {
        let offset = offset.min(self.len);
        if offset == 0 {
            return Ok(0);
        }
        // The chunk holding `offset`, or the last one at the end of the text.
        let chunk = self.starts.partition_point(|&start| start <= offset) - 1;
        let base = self.starts[chunk];
        let text = &self.chunks[chunk];
        let at = floor_char_boundary(text, offset - base);
        let next_is_lf = text[at..].starts_with('\n');
        let earlier = (0..chunk)
            .rev()
            .map(|i| (self.starts[i], self.chunks[i].as_str()));
        Ok(line_start_before(
            std::iter::once((base, &text[..at])).chain(earlier),
            next_is_lf,
        ))
    }
}

/// Streaming reader decoding UTF-8 from an [`io::BufRead`].
///
/// I/O errors are passed through unchanged; nothing is retried. After an
/// error the reader should be discarded.
#[derive(Debug)]
pub struct Utf8Reader<R> {
    inner: R,
    offset: usize,
}

impl<R: io::BufRead> Utf8Reader<R> {
    /// Creates a reader whose first byte is at offset 0.
    pub fn new(inner: R) -> Self {
        Self::with_offset(inner, 0)
    }

    /// Creates a reader whose first byte is at `offset`.
    pub fn with_offset(inner: R, offset: usize) -> Self {
        Utf8Reader { inner, offset }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.inner.fill_buf()?.first().copied();
        if byte.is_some() {
            self.inner.consume(1);
        }
        Ok(byte)
    }
}

impl<R: io::BufRead> CharReader for Utf8Reader<R> {
    type Error = ReadError;

    fn next_char(&mut self) -> Result<Option<(usize, char)>, ReadError> {
        let start = self.offset;
        let Some(first) = self.next_byte()? else {
            return Ok(None);
        };
        let invalid = ReadError::InvalidUtf8 { offset: start };
        let Some(len) = utf8::len_from_first_byte(first) else {
            return Err(invalid);
        };
        let mut buf = [0; utf8::MAX_BYTE_COUNT];
        buf[0] = first;
        for slot in &mut buf[1..len] {
            match self.next_byte()? {
                Some(byte) if utf8::is_cont_byte(byte) => *slot = byte,
                _ => return Err(invalid),
            }
        }
        let ch = utf8::decode_char(&buf[..len]).ok_or(invalid)?;
        self.offset += len;
        Ok(Some((start, ch)))
    }
}

use crate::{
    property_ty::{word_break_property, WordBreakProperty},
    text_source::{CharReader, StrReader},
    word_breaker::{Boundary, Breaks, WordBreaker},
};
use std::{convert::Infallible, ops::Range};

/// Coarse classification of a segment, taken from its first code point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Letters, digits, Katakana and the punctuation fused into them.
    Word,
    /// A run of horizontal whitespace.
    Whitespace,
    /// A line ending; `CR LF` is a single segment.
    LineBreak,
    /// Anything else: punctuation, symbols, ideographs, emoji.
    Other,
}

impl SegmentKind {
    /// Returns the kind of a segment starting with a code point of this property.
    pub fn of(property: WordBreakProperty) -> Self {
        use WordBreakProperty::*;
        match property {
            ALetter | HebrewLetter | Numeric | Katakana | ExtendNumLet => SegmentKind::Word,
            WSegSpace => SegmentKind::Whitespace,
            CR | LF | Newline => SegmentKind::LineBreak,
            _ => SegmentKind::Other,
        }
    }

    /// Whether word motions stop at segments of this kind.
    pub fn is_word_like(self) -> bool {
        matches!(self, SegmentKind::Word | SegmentKind::Other)
    }
}

/// A maximal run of code points between two word boundaries.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Byte range of the segment. Never empty.
    pub range: Range<usize>,
    /// Kind of the segment.
    pub kind: SegmentKind,
}

impl Segment {
    fn new(start: Boundary, end: usize) -> Self {
        Segment {
            range: start.offset..end,
            kind: SegmentKind::of(start.property),
        }
    }

    /// Offset of the first code point.
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// Offset just past the last code point.
    pub fn end(&self) -> usize {
        self.range.end
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Reading,
    Drained,
    Done,
}

/// Lazy iterator grouping the code points of a reader into [`Segment`]s.
///
/// The reader's first code point is treated as start of text, so restarting
/// a scan means building a new `Segments` over a reader positioned at a safe
/// start (see [`TextSource::line_start`](crate::TextSource::line_start)).
///
/// A reader error is yielded once, after which the iterator is exhausted.
#[derive(Debug)]
pub struct Segments<R> {
    reader: R,
    breaker: WordBreaker,
    queued: Breaks,
    next_queued: usize,
    open: Option<Boundary>,
    end: usize,
    remaining: Option<usize>,
    truncated: bool,
    state: State,
}

impl<R: CharReader> Segments<R> {
    /// Creates an iterator over the segments of `reader`.
    pub fn new(reader: R) -> Self {
        Segments {
            reader,
            breaker: WordBreaker::new(),
            queued: Breaks::new(),
            next_queued: 0,
            open: None,
            end: 0,
            remaining: None,
            truncated: false,
            state: State::Reading,
        }
    }

    /// Stops the scan after `limit` code points.
    ///
    /// Segments completed within the budget are still produced; the segment
    /// in progress when the budget runs out is not.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.remaining = Some(limit);
        self
    }

    /// Returns whether the scan stopped because the code point budget ran out.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Returns how many more code points the scan may read, or `None` when
    /// it is unbounded.
    pub fn remaining_budget(&self) -> Option<usize> {
        self.remaining
    }

    fn read(&mut self) -> Result<Option<(usize, char)>, R::Error> {
        let next = self.reader.next_char()?;
        match (next, &mut self.remaining) {
            (Some(_), Some(0)) => {
                self.truncated = true;
                Ok(None)
            }
            (Some(_), Some(remaining)) => {
                *remaining -= 1;
                Ok(next)
            }
            _ => Ok(next),
        }
    }
}

impl<R: CharReader> Iterator for Segments<R> {
    type Item = Result<Segment, R::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(&boundary) = self.queued.get(self.next_queued) {
                self.next_queued += 1;
                match self.open.replace(boundary) {
                    Some(start) if start.offset < boundary.offset => {
                        return Some(Ok(Segment::new(start, boundary.offset)))
                    }
                    _ => continue,
                }
            }
            match self.state {
                State::Reading => {}
                State::Drained => {
                    self.state = State::Done;
                    let start = self.open.take()?;
                    return Some(Ok(Segment::new(start, self.end)));
                }
                State::Done => return None,
            }
            self.next_queued = 0;
            match self.read() {
                Ok(Some((offset, ch))) => {
                    self.queued = self.breaker.process(offset, ch);
                    if self.open.is_none() {
                        self.open = Some(Boundary {
                            offset,
                            property: word_break_property(ch),
                        });
                    }
                    self.end = offset + ch.len_utf8();
                }
                Ok(None) if self.truncated => {
                    self.queued.clear();
                    self.state = State::Done;
                }
                Ok(None) => {
                    self.queued = self.breaker.finish();
                    self.state = State::Drained;
                }
                Err(err) => {
                    self.queued.clear();
                    self.state = State::Done;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<R: CharReader> std::iter::FusedIterator for Segments<R> {}

/// Returns an iterator over the word segments of `s`.
///
/// Concatenating the segments reproduces `s`.
///
/// # Examples
///
/// ```
/// use wordbreak::word_segments;
/// let segments: Vec<&str> = word_segments("It's 3.5 \u{1F600}!").collect();
/// assert_eq!(segments, vec!["It's", " ", "3.5", " ", "\u{1F600}", "!"]);
/// ```
pub fn word_segments(s: &str) -> WordSegments<'_> {
    WordSegments {
        text: s,
        inner: Segments::new(StrReader::new(s)),
    }
}

/// Iterator over the word segments of a string. See [`word_segments`].
#[derive(Debug)]
pub struct WordSegments<'a> {
    text: &'a str,
    inner: Segments<StrReader<'a, Infallible>>,
}

impl<'a> Iterator for WordSegments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        match self.inner.next()? {
            Ok(segment) => Some(&self.text[segment.range]),
            Err(never) => match never {},
        }
    }
}

impl std::iter::FusedIterator for WordSegments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ReadError, text_source::Utf8Reader};
    use pretty_assertions::assert_eq;
    use std::io;

    fn words(s: &str) -> Vec<&str> {
        word_segments(s).collect()
    }

    fn kinds(s: &str) -> Vec<SegmentKind> {
        Segments::new(StrReader::<Infallible>::new(s))
            .map(|segment| match segment {
                Ok(segment) => segment.kind,
                Err(never) => match never {},
            })
            .collect()
    }

    #[test]
    fn test_empty_and_single() {
        assert!(words("").is_empty());
        assert_eq!(vec!["x"], words("x"));
        assert_eq!(vec!["\u{308}"], words("\u{308}"));
    }

    #[test]
    fn test_letter_run_fusion() {
        assert_eq!(vec!["hello"], words("hello"));
        assert_eq!(vec!["it's"], words("it's"));
        assert_eq!(vec!["foo123"], words("foo123"));
    }

    #[test]
    fn test_whitespace_and_punctuation() {
        assert_eq!(vec!["foo", " ", "123"], words("foo 123"));
        assert_eq!(vec!["a", "    ", "b"], words("a    b"));
        assert_eq!(vec!["\t", "\t"], words("\t\t"));
        assert_eq!(vec!["hello", ",", " ", "world", "!"], words("hello, world!"));
        assert_eq!(vec!["foo.bar", "(", ")"], words("foo.bar()"));
        assert_eq!(vec!["1,000.50", " ", "USD"], words("1,000.50 USD"));
        assert_eq!(vec!["e.g", "."], words("e.g."));
    }

    #[test]
    fn test_kinds() {
        use SegmentKind::*;
        assert_eq!(
            vec![Word, Whitespace, Other, LineBreak, Other],
            kinds("ab  (\r\n\u{1f600}")
        );
        assert_eq!(vec![Word, Other, Word], kinds("a:\u{30a2}"));
        assert_eq!(vec![Word, Other], kinds("1,"));
    }

    #[test]
    fn test_segment_ranges() {
        let segments: Vec<Segment> = Segments::new(StrReader::<Infallible>::with_base("a b", 10))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            vec![10..11, 11..12, 12..13],
            segments.iter().map(|s| s.range.clone()).collect::<Vec<_>>()
        );
        assert_eq!(10, segments[0].start());
        assert_eq!(13, segments[2].end());
    }

    #[test]
    fn test_limit_drops_unfinished_segment() {
        let mut segments = Segments::new(StrReader::<Infallible>::new("ab cd ef")).with_limit(4);
        let ranges: Vec<_> = segments.by_ref().map(|s| s.unwrap().range).collect();
        assert_eq!(vec![0..2, 2..3], ranges);
        assert!(segments.truncated());

        let mut exact = Segments::new(StrReader::<Infallible>::new("ab")).with_limit(2);
        assert_eq!(1, exact.by_ref().count());
        assert!(!exact.truncated());
        assert_eq!(Some(0), exact.remaining_budget());

        let mut spare = Segments::new(StrReader::<Infallible>::new("ab")).with_limit(5);
        assert_eq!(1, spare.by_ref().count());
        assert_eq!(Some(3), spare.remaining_budget());
        assert_eq!(None, Segments::new(StrReader::<Infallible>::new("ab")).remaining_budget());
    }

    #[test]
    fn test_reader_error_is_yielded_once() {
        let bytes: &[u8] = b"ab \xff cd";
        let mut segments = Segments::new(Utf8Reader::new(bytes));
        assert_eq!(0..2, segments.next().unwrap().unwrap().range);
        // The space is never closed off: the error arrives first.
        match segments.next() {
            Some(Err(ReadError::InvalidUtf8 { offset })) => assert_eq!(3, offset),
            other => panic!("unexpected {:?}", other),
        }
        assert!(segments.next().is_none());
    }

    #[test]
    fn test_io_error_passes_through() {
        struct Failing;
        impl io::Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::TimedOut, "storage timed out"))
            }
        }
        let mut segments = Segments::new(Utf8Reader::new(io::BufReader::new(Failing)));
        match segments.next() {
            Some(Err(ReadError::Io(err))) => assert_eq!(io::ErrorKind::TimedOut, err.kind()),
            other => panic!("unexpected {:?}", other),
        }
        assert!(segments.next().is_none());
    }
}

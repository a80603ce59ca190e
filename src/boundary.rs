use crate::{
    segment::{Segment, Segments},
    text_source::TextSource,
};
use log::{debug, trace};
use std::{fmt, ops::Range};

/// Where a query restarts the scan before its offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SafeContext {
    /// The start of the line holding the offset.
    #[default]
    LineStart,
    /// The start of the text.
    DocumentStart,
}

/// Settings shared by all queries of a [`Segmenter`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SegmenterConfig {
    /// Where scans restart.
    pub context: SafeContext,
    /// Maximum number of code points a single query may read.
    ///
    /// Queries that run out of budget report `None` (or a partial segment
    /// list) instead of reading the rest of the text.
    pub scan_limit: Option<usize>,
}

impl SegmenterConfig {
    /// Sets where scans restart.
    pub fn with_context(mut self, context: SafeContext) -> Self {
        self.context = context;
        self
    }

    /// Caps how many code points a single query may read.
    pub fn with_scan_limit(mut self, limit: usize) -> Self {
        self.scan_limit = Some(limit);
        self
    }
}

/// Word boundary queries over a [`TextSource`], for cursor motion and layout.
///
/// Every query rescans from a safe start before its offset, so results never
/// depend on earlier queries. Offsets past the end of the text are clamped.
///
/// # Examples
///
/// ```
/// use wordbreak::Segmenter;
///
/// let text = "let x = foo.bar;\nbaz";
/// let segmenter = Segmenter::new(text);
/// assert_eq!(segmenter.next_boundary(5).unwrap(), Some(5));
/// assert_eq!(segmenter.next_boundary(9).unwrap(), Some(15));
/// assert_eq!(segmenter.prev_boundary(9).unwrap(), Some(8));
/// assert_eq!(segmenter.next_word_start(8).unwrap(), Some(15));
/// assert_eq!(segmenter.prev_word_start(17).unwrap(), Some(15));
/// ```
pub struct Segmenter<'s, S: ?Sized> {
    source: &'s S,
    config: SegmenterConfig,
}

impl<S: ?Sized> Clone for Segmenter<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Segmenter<'_, S> {}

impl<S: ?Sized> fmt::Debug for Segmenter<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segmenter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'s, S: TextSource + ?Sized> Segmenter<'s, S> {
    /// Creates a segmenter with the default configuration.
    pub fn new(source: &'s S) -> Self {
        Self::with_config(source, SegmenterConfig::default())
    }

    /// Creates a segmenter with the given configuration.
    pub fn with_config(source: &'s S, config: SegmenterConfig) -> Self {
        Segmenter { source, config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> SegmenterConfig {
        self.config
    }

    /// Returns the position a scan covering `offset` restarts from.
    pub fn safe_start(&self, offset: usize) -> Result<usize, S::Error> {
        let start = match self.config.context {
            SafeContext::LineStart => self.source.line_start(offset)?,
            SafeContext::DocumentStart => 0,
        };
        trace!("safe start for offset {} is {}", offset, start);
        Ok(start)
    }

    /// Returns the segments of the text starting at `offset`, which is
    /// treated as start of text. Pass a safe start to get the same segments
    /// a scan of the whole text would produce.
    pub fn segments_from(&self, offset: usize) -> Result<Segments<S::Reader<'s>>, S::Error> {
        self.budgeted_segments(offset, self.config.scan_limit)
    }

    fn budgeted_segments(
        &self,
        offset: usize,
        budget: Option<usize>,
    ) -> Result<Segments<S::Reader<'s>>, S::Error> {
        let segments = Segments::new(self.source.reader_at(offset)?);
        Ok(match budget {
            Some(limit) => segments.with_limit(limit),
            None => segments,
        })
    }

    /// Returns the segments overlapping the half-open `range`.
    ///
    /// The first and last segment may extend past the range. An empty range
    /// overlaps nothing.
    pub fn segments_in_range(&self, range: Range<usize>) -> Result<Vec<Segment>, S::Error> {
        let len = self.source.len();
        let (start, end) = (range.start.min(len), range.end.min(len));
        let mut found = Vec::new();
        if start >= end {
            return Ok(found);
        }
        let mut segments = self.segments_from(self.safe_start(start)?)?;
        for segment in segments.by_ref() {
            let segment = segment?;
            if segment.start() >= end {
                break;
            }
            if segment.end() > start {
                found.push(segment);
            }
        }
        if segments.truncated() {
            debug!("scan budget exhausted listing segments in {:?}", range);
        }
        trace!("{} segments overlap {:?}", found.len(), range);
        Ok(found)
    }

    /// Returns the nearest boundary at or after `offset`.
    ///
    /// The start and the end of the text are boundaries.
    pub fn next_boundary(&self, offset: usize) -> Result<Option<usize>, S::Error> {
        let offset = offset.min(self.source.len());
        let start = self.safe_start(offset)?;
        if start == offset {
            return Ok(Some(offset));
        }
        let mut segments = self.segments_from(start)?;
        for segment in segments.by_ref() {
            let segment = segment?;
            if segment.end() >= offset {
                trace!("next boundary from {} is {}", offset, segment.end());
                return Ok(Some(segment.end()));
            }
        }
        debug!("scan budget exhausted looking for boundary after {}", offset);
        Ok(None)
    }

    /// Returns the nearest boundary at or before `offset`.
    pub fn prev_boundary(&self, offset: usize) -> Result<Option<usize>, S::Error> {
        let offset = offset.min(self.source.len());
        let start = self.safe_start(offset)?;
        if start == offset {
            return Ok(Some(offset));
        }
        let mut segments = self.segments_from(start)?;
        for segment in segments.by_ref() {
            let segment = segment?;
            if segment.end() >= offset {
                let boundary = if segment.end() == offset {
                    segment.end()
                } else {
                    segment.start()
                };
                trace!("previous boundary from {} is {}", offset, boundary);
                return Ok(Some(boundary));
            }
        }
        debug!("scan budget exhausted looking for boundary before {}", offset);
        Ok(None)
    }

    /// Returns the start of the first word after `offset`, skipping
    /// whitespace and line breaks. This is the `w` motion.
    ///
    /// Returns `None` when no word follows.
    pub fn next_word_start(&self, offset: usize) -> Result<Option<usize>, S::Error> {
        let offset = offset.min(self.source.len());
        let mut segments = self.segments_from(self.safe_start(offset)?)?;
        for segment in segments.by_ref() {
            let segment = segment?;
            if segment.start() > offset && segment.kind.is_word_like() {
                trace!("next word start from {} is {}", offset, segment.start());
                return Ok(Some(segment.start()));
            }
        }
        if segments.truncated() {
            debug!("scan budget exhausted looking for word after {}", offset);
        }
        Ok(None)
    }

    /// Returns the end of the first word ending after `offset`, skipping
    /// whitespace and line breaks. This is the `e` motion, with an exclusive
    /// end.
    pub fn next_word_end(&self, offset: usize) -> Result<Option<usize>, S::Error> {
        let offset = offset.min(self.source.len());
        let mut segments = self.segments_from(self.safe_start(offset)?)?;
        for segment in segments.by_ref() {
            let segment = segment?;
            if segment.end() > offset && segment.kind.is_word_like() {
                trace!("next word end from {} is {}", offset, segment.end());
                return Ok(Some(segment.end()));
            }
        }
        if segments.truncated() {
            debug!("scan budget exhausted looking for word end after {}", offset);
        }
        Ok(None)
    }

    /// Returns the start of the last word starting before `offset`, crossing
    /// lines backwards as needed. This is the `b` motion.
    ///
    /// Returns `None` when no word precedes. The scan limit covers all the
    /// lines rescanned on the way back, not each line separately.
    pub fn prev_word_start(&self, offset: usize) -> Result<Option<usize>, S::Error> {
        let offset = offset.min(self.source.len());
        let mut bound = offset;
        let mut start = self.safe_start(offset)?;
        let mut budget = self.config.scan_limit;
        loop {
            let mut found = None;
            let mut segments = self.budgeted_segments(start, budget)?;
            for segment in segments.by_ref() {
                let segment = segment?;
                if segment.start() >= bound {
                    break;
                }
                if segment.kind.is_word_like() {
                    found = Some(segment.start());
                }
            }
            if found.is_some() {
                trace!("previous word start from {} is {:?}", offset, found);
                return Ok(found);
            }
            if segments.truncated() {
                debug!("scan budget exhausted looking for word before {}", offset);
                return Ok(None);
            }
            if start == 0 {
                return Ok(None);
            }
            budget = segments.remaining_budget();
            // Lines from `start` on hold no word before `offset`.
            bound = start;
            start = self.safe_start(start - 1)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{segment::SegmentKind, text_source::ChunkedText};
    use pretty_assertions::assert_eq;

    fn ranges(segments: Vec<Segment>) -> Vec<Range<usize>> {
        segments.into_iter().map(|s| s.range).collect()
    }

    #[test]
    fn test_segments_in_range() {
        let text = "one two\r\nthree";
        let segmenter = Segmenter::new(text);
        assert_eq!(vec![0..3, 3..4, 4..7], ranges(segmenter.segments_in_range(1..5).unwrap()));
        assert_eq!(vec![7..9, 9..14], ranges(segmenter.segments_in_range(8..10).unwrap()));
        assert!(segmenter.segments_in_range(4..4).unwrap().is_empty());
        assert!(segmenter.segments_in_range(50..60).unwrap().is_empty());
        let kinds: Vec<_> = segmenter
            .segments_in_range(0..text.len())
            .unwrap()
            .into_iter()
            .map(|s| s.kind)
            .collect();
        assert_eq!(
            vec![
                SegmentKind::Word,
                SegmentKind::Whitespace,
                SegmentKind::Word,
                SegmentKind::LineBreak,
                SegmentKind::Word
            ],
            kinds
        );
    }

    #[test]
    fn test_boundaries() {
        let text = "ab cd\r\nef";
        let segmenter = Segmenter::new(text);
        assert_eq!(Some(0), segmenter.next_boundary(0).unwrap());
        assert_eq!(Some(2), segmenter.next_boundary(1).unwrap());
        assert_eq!(Some(2), segmenter.next_boundary(2).unwrap());
        assert_eq!(Some(0), segmenter.prev_boundary(1).unwrap());
        assert_eq!(Some(3), segmenter.prev_boundary(4).unwrap());
        // between CR and LF
        assert_eq!(Some(7), segmenter.next_boundary(6).unwrap());
        assert_eq!(Some(5), segmenter.prev_boundary(6).unwrap());
        assert_eq!(Some(7), segmenter.prev_boundary(7).unwrap());
        assert_eq!(Some(9), segmenter.next_boundary(8).unwrap());
        assert_eq!(Some(9), segmenter.next_boundary(100).unwrap());
        assert_eq!(Some(9), segmenter.prev_boundary(9).unwrap());
    }

    #[test]
    fn test_boundaries_with_deferred_punctuation() {
        let text = "a.b a. b";
        let segmenter = Segmenter::new(text);
        assert_eq!(Some(3), segmenter.next_boundary(1).unwrap());
        assert_eq!(Some(0), segmenter.prev_boundary(2).unwrap());
        assert_eq!(Some(5), segmenter.next_boundary(5).unwrap());
        assert_eq!(Some(5), segmenter.prev_boundary(5).unwrap());
    }

    #[test]
    fn test_word_motions() {
        let text = "foo  bar.baz(qux)\n\n  end";
        let segmenter = Segmenter::new(text);
        assert_eq!(Some(5), segmenter.next_word_start(0).unwrap());
        assert_eq!(Some(12), segmenter.next_word_start(5).unwrap());
        assert_eq!(Some(13), segmenter.next_word_start(12).unwrap());
        assert_eq!(Some(16), segmenter.next_word_start(13).unwrap());
        assert_eq!(Some(21), segmenter.next_word_start(16).unwrap());
        assert_eq!(None, segmenter.next_word_start(21).unwrap());

        assert_eq!(Some(3), segmenter.next_word_end(0).unwrap());
        assert_eq!(Some(12), segmenter.next_word_end(3).unwrap());
        assert_eq!(Some(24), segmenter.next_word_end(17).unwrap());
        assert_eq!(None, segmenter.next_word_end(24).unwrap());

        assert_eq!(Some(16), segmenter.prev_word_start(21).unwrap());
        assert_eq!(Some(5), segmenter.prev_word_start(12).unwrap());
        assert_eq!(Some(5), segmenter.prev_word_start(7).unwrap());
        assert_eq!(Some(0), segmenter.prev_word_start(5).unwrap());
        assert_eq!(None, segmenter.prev_word_start(0).unwrap());
    }

    #[test]
    fn test_prev_word_start_on_leading_blank_lines() {
        let segmenter = Segmenter::new("\n\n  x");
        assert_eq!(None, segmenter.prev_word_start(4).unwrap());
        assert_eq!(Some(4), segmenter.prev_word_start(5).unwrap());
    }

    #[test]
    fn test_document_start_context_agrees() {
        let text = "x\ny.z\r\n1,2 \u{5d0}\"\u{5d1}";
        let by_line = Segmenter::new(text);
        let by_document = Segmenter::with_config(
            text,
            SegmenterConfig::default().with_context(SafeContext::DocumentStart),
        );
        for offset in 0..=text.len() {
            assert_eq!(
                by_line.next_boundary(offset).unwrap(),
                by_document.next_boundary(offset).unwrap()
            );
            assert_eq!(
                by_line.prev_boundary(offset).unwrap(),
                by_document.prev_boundary(offset).unwrap()
            );
        }
    }

    #[test]
    fn test_scan_limit() {
        let text = "aaaaaaaaaa bbbb";
        let config = SegmenterConfig::default().with_scan_limit(4);
        let segmenter = Segmenter::with_config(text, config);
        assert_eq!(None, segmenter.next_boundary(2).unwrap());
        assert_eq!(None, segmenter.next_word_start(0).unwrap());
        assert!(segmenter.segments_in_range(0..5).unwrap().is_empty());
        assert_eq!(Some(4), config.scan_limit);
    }

    #[test]
    fn test_prev_word_start_shares_scan_limit_across_lines() {
        let text = format!("x{}", "\n".repeat(50));
        let unlimited = Segmenter::new(text.as_str());
        assert_eq!(Some(0), unlimited.prev_word_start(text.len()).unwrap());

        let limited = SegmenterConfig::default().with_scan_limit(8);
        let segmenter = Segmenter::with_config(text.as_str(), limited);
        assert_eq!(None, segmenter.prev_word_start(text.len()).unwrap());
        let chunked: ChunkedText = text.split_inclusive('\n').collect();
        let segmenter = Segmenter::with_config(&chunked, limited);
        assert_eq!(None, segmenter.prev_word_start(chunked.len()).unwrap());

        let short = Segmenter::with_config("x\n\n", limited);
        assert_eq!(Some(0), short.prev_word_start(3).unwrap());
    }

    #[test]
    fn test_chunked_source() {
        let chunked: ChunkedText = ["foo ba", "r\nb", "az"].into_iter().collect();
        let segmenter = Segmenter::new(&chunked);
        assert_eq!(
            vec![0..3, 3..4, 4..7, 7..8, 8..11],
            ranges(segmenter.segments_in_range(0..11).unwrap())
        );
        assert_eq!(Some(7), segmenter.next_boundary(5).unwrap());
        assert_eq!(Some(8), segmenter.next_word_start(4).unwrap());
        assert_eq!(Some(4), segmenter.prev_word_start(8).unwrap());
    }

    #[test]
    fn test_source_errors_pass_through() {
        let chunked: ChunkedText = ["\u{e9}t\u{e9}"].into_iter().collect();
        let segmenter = Segmenter::with_config(
            &chunked,
            SegmenterConfig::default().with_context(SafeContext::DocumentStart),
        );
        assert_eq!(Some(5), segmenter.next_boundary(1).unwrap());
        let text = "\u{e9}t\u{e9}";
        let segmenter = Segmenter::new(text);
        assert!(segmenter.segments_from(1).is_err());
    }
}

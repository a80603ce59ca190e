#![deny(unsafe_op_in_unsafe_fn)]
#![deny(missing_docs, missing_debug_implementations)]
//! Incremental Unicode word segmentation for text editors.
//!
//! Word boundaries follow the default word-boundary rules of UAX #29
//! (Unicode Text Segmentation), using the Unicode 16.0.0 property data. They
//! drive double-click selection, word-wise cursor motion and word deletion.
//!
//! The `WordBreaker` type is the core scanner. It is fed one code point at a
//! time, together with that code point's byte offset, and hands back the
//! boundaries it has confirmed so far. It keeps a constant amount of state
//! and never allocates.
//!
//! The `TextSource` trait describes text the library can read without owning
//! it: a `str`, a `ChunkedText` split across chunks the way a rope stores it,
//! or anything else that can hand out a forward `CharReader` at an offset.
//!
//! The `Segmenter` type answers the questions an editor asks: which words
//! overlap this range, where is the next boundary, where does the next word
//! start.
//!
//! # Restarting a scan
//!
//! Word boundaries depend on context before the cursor, so a query never
//! starts reading at its offset. Instead it restarts from a *safe start*,
//! a position the rules guarantee a fresh scanner handles exactly like a
//! scan from the start of the text:
//!
//! * The start of the text is always safe.
//! * The position right after a CR, LF or Newline code point is safe,
//!   because every rule breaks after a line ending.
//! * The position between the CR and the LF of a CR LF pair is *not* safe.
//!
//! # Boundary rules
//!
//! * CR LF is never split; every other line ending is its own segment.
//! * Extend, Format and ZWJ code points stay with whatever precedes them.
//! * Letters, digits and Katakana fuse into words, along with the apostrophes,
//!   periods and commas that sit *between* two letters or two digits.
//! * Regional indicators pair up into flags.
//! * Everything else breaks.
//!
//! ```
//! use wordbreak::word_segments;
//!
//! let words: Vec<&str> = word_segments("The quick (\"brown\") fox can't jump 32.3 feet")
//!     .filter(|s| s.chars().any(char::is_alphanumeric))
//!     .collect();
//! assert_eq!(words, ["The", "quick", "brown", "fox", "can't", "jump", "32.3", "feet"]);
//! ```

pub(crate) mod tables;

pub(crate) mod property_ty;

pub(crate) mod word_breaker;

pub(crate) mod text_source;

pub(crate) mod segment;

pub(crate) mod boundary;

pub(crate) mod error;

pub(crate) mod utf8;

pub use property_ty::{
    classify, is_extended_pictographic, word_break_property, CodePointProperty, WordBreakProperty,
};

pub use word_breaker::{word_boundaries, Boundary, Breaks, WordBoundaries, WordBreaker};

pub use text_source::{ChunkedReader, ChunkedText, CharReader, StrReader, TextSource, Utf8Reader};

pub use segment::{word_segments, Segment, SegmentKind, Segments, WordSegments};

pub use boundary::{SafeContext, Segmenter, SegmenterConfig};

pub use error::{OffsetError, ReadError};

/// The version of Unicode the property tables are generated from.
pub const UNICODE_VERSION: (u8, u8, u8) = (16, 0, 0);

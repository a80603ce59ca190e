use crate::tables::{emoji::EXTENDED_PICTOGRAPHIC_TABLE, word::WORD_BREAK_TABLE};
use std::cmp::Ordering;

/// The `Word_Break` property value of a code point, as defined by UAX #29.
///
/// Code points not listed in the Unicode data files are `Other`.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WordBreakProperty {
    /// Carriage return, U+000D.
    CR,
    /// Line feed, U+000A.
    LF,
    /// Other mandatory line endings: VT, FF, NEL, LS and PS.
    Newline,
    /// Zero width joiner, U+200D.
    ZWJ,
    /// Horizontal whitespace such as U+0020 and U+3000.
    WSegSpace,
    /// Combining marks, emoji modifiers and similar.
    Extend,
    /// Format controls such as the soft hyphen.
    Format,
    /// Alphabetic letters.
    ALetter,
    /// Hebrew letters.
    HebrewLetter,
    /// Punctuation joining letters, such as `:`.
    MidLetter,
    /// Punctuation joining digits, such as `,` and `;`.
    MidNum,
    /// Punctuation joining either letters or digits, such as `.`.
    MidNumLet,
    /// The apostrophe, U+0027.
    SingleQuote,
    /// The quotation mark, U+0022.
    DoubleQuote,
    /// Digits.
    Numeric,
    /// Katakana.
    Katakana,
    /// Connector punctuation such as `_`.
    ExtendNumLet,
    /// Regional indicator symbols, which pair up into flags.
    RegionalIndicator,
    /// Everything else.
    Other,
}

impl WordBreakProperty {
    /// `AHLetter`: `ALetter` or `Hebrew_Letter`.
    #[inline]
    pub fn is_ah_letter(self) -> bool {
        matches!(self, Self::ALetter | Self::HebrewLetter)
    }

    /// `MidNumLetQ`: `MidNumLet` or `Single_Quote`.
    #[inline]
    pub fn is_mid_num_let_q(self) -> bool {
        matches!(self, Self::MidNumLet | Self::SingleQuote)
    }

    /// `CR`, `LF` or `Newline`.
    #[inline]
    pub fn is_newline(self) -> bool {
        matches!(self, Self::CR | Self::LF | Self::Newline)
    }

    /// Properties that are fused onto the preceding code point by the ignore rule.
    #[inline]
    pub fn is_ignorable(self) -> bool {
        matches!(self, Self::Extend | Self::Format | Self::ZWJ)
    }
}

/// Everything the word breaker needs to know about a single code point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CodePointProperty {
    /// The `Word_Break` property value.
    pub word_break: WordBreakProperty,
    /// Whether the code point is `Extended_Pictographic`.
    ///
    /// This is independent from `word_break`: U+2139 is both `ALetter` and
    /// `Extended_Pictographic`.
    pub extended_pictographic: bool,
}

fn range_ordering(lo: char, hi: char, ch: char) -> Ordering {
    if hi < ch {
        Ordering::Less
    } else if lo > ch {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Returns the `Word_Break` property of the specified code point.
///
/// # Examples
///
/// ```
/// use wordbreak::{word_break_property, WordBreakProperty};
/// assert_eq!(word_break_property('a'), WordBreakProperty::ALetter);
/// assert_eq!(word_break_property('\''), WordBreakProperty::SingleQuote);
/// assert_eq!(word_break_property('\u{10FFFF}'), WordBreakProperty::Other);
/// ```
pub fn word_break_property(ch: char) -> WordBreakProperty {
    match WORD_BREAK_TABLE.binary_search_by(|&(lo, hi, _)| range_ordering(lo, hi, ch)) {
        Ok(idx) => WORD_BREAK_TABLE[idx].2,
        Err(_) => WordBreakProperty::Other,
    }
}

/// Returns whether the specified code point is `Extended_Pictographic`.
pub fn is_extended_pictographic(ch: char) -> bool {
    EXTENDED_PICTOGRAPHIC_TABLE
        .binary_search_by(|&(lo, hi)| range_ordering(lo, hi, ch))
        .is_ok()
}

/// Classifies a code point for word segmentation.
///
/// This is a total function: every `char` maps to exactly one property.
pub fn classify(ch: char) -> CodePointProperty {
    CodePointProperty {
        word_break: word_break_property(ch),
        extended_pictographic: is_extended_pictographic(ch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{emoji::EXTENDED_PICTOGRAPHIC_TABLE, word::WORD_BREAK_TABLE};
    use WordBreakProperty::*;

    #[test]
    fn test_ascii() {
        assert_eq!(LF, word_break_property('\n'));
        assert_eq!(CR, word_break_property('\r'));
        assert_eq!(Newline, word_break_property('\u{b}'));
        assert_eq!(WSegSpace, word_break_property(' '));
        assert_eq!(Other, word_break_property('\t'));
        assert_eq!(ALetter, word_break_property('Q'));
        assert_eq!(Numeric, word_break_property('7'));
        assert_eq!(SingleQuote, word_break_property('\''));
        assert_eq!(DoubleQuote, word_break_property('"'));
        assert_eq!(MidNumLet, word_break_property('.'));
        assert_eq!(MidLetter, word_break_property(':'));
        assert_eq!(MidNum, word_break_property(','));
        assert_eq!(MidNum, word_break_property(';'));
        assert_eq!(ExtendNumLet, word_break_property('_'));
        assert_eq!(Other, word_break_property('('));
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(Newline, word_break_property('\u{85}'));
        assert_eq!(Newline, word_break_property('\u{2028}'));
        assert_eq!(Format, word_break_property('\u{ad}'));
        assert_eq!(Extend, word_break_property('\u{308}'));
        assert_eq!(Extend, word_break_property('\u{1f3fb}'));
        assert_eq!(ZWJ, word_break_property('\u{200d}'));
        assert_eq!(HebrewLetter, word_break_property('\u{5d0}'));
        assert_eq!(Katakana, word_break_property('\u{30a2}'));
        assert_eq!(Katakana, word_break_property('\u{30fc}'));
        assert_eq!(RegionalIndicator, word_break_property('\u{1f1e6}'));
        assert_eq!(WSegSpace, word_break_property('\u{3000}'));
        assert_eq!(MidNumLet, word_break_property('\u{ff0e}'));
        assert_eq!(Other, word_break_property('\u{4e00}'));
        assert_eq!(Other, word_break_property('\u{10ffff}'));
    }

    #[test]
    fn test_extended_pictographic() {
        assert_eq!(
            CodePointProperty {
                word_break: ALetter,
                extended_pictographic: true
            },
            classify('\u{2139}')
        );
        assert_eq!(
            CodePointProperty {
                word_break: Other,
                extended_pictographic: true
            },
            classify('\u{1f600}')
        );
        assert!(!is_extended_pictographic('a'));
        assert!(!is_extended_pictographic('\u{1f1e6}'));
    }

    #[test]
    fn test_tables_sorted_and_disjoint() {
        for pair in WORD_BREAK_TABLE.windows(2) {
            assert!(pair[0].0 <= pair[0].1);
            assert!(pair[0].1 < pair[1].0, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
        assert!(WORD_BREAK_TABLE.iter().all(|&(_, _, prop)| prop != Other));
        for pair in EXTENDED_PICTOGRAPHIC_TABLE.windows(2) {
            assert!(pair[0].0 <= pair[0].1);
            assert!(pair[0].1 < pair[1].0, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_range_edges() {
        for &(lo, hi, prop) in WORD_BREAK_TABLE {
            assert_eq!(prop, word_break_property(lo));
            assert_eq!(prop, word_break_property(hi));
        }
    }
}

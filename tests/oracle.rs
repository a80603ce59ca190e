//! Curated text compared against `unicode-segmentation`.
//!
//! ZWJ sequences stay out of these cases: that crate splits some of them
//! differently, and the conformance file already covers them.

use pretty_assertions::assert_eq;
use rstest::rstest;
use unicode_segmentation::UnicodeSegmentation;
use wordbreak::{word_segments, Segmenter};

#[rstest]
#[case::prose("The quick (\"brown\") fox can't jump 32.3 feet, right?")]
#[case::code("fn main() { let x_1 = foo.bar(3.14, \"baz\"); }\n")]
#[case::numbers("1,000.50 USD; 3..14; 2:30; v1.2.3")]
#[case::crlf("line one\r\nline two\rline three\n\n")]
#[case::tabs_and_spaces("\tindented  \u{3000}wide\u{a0}nbsp")]
#[case::accents("cafe\u{301} na\u{ef}ve re\u{301}sume\u{301}")]
#[case::hebrew("\u{5e9}\u{5dc}\u{5d5}\u{5dd} \u{5e6}\"\u{5d4}\u{5dc} \u{5d0}'")]
#[case::katakana("\u{30ab}\u{30bf}\u{30ab}\u{30ca}\u{30fc} \u{3072}\u{3089}\u{304c}\u{306a}")]
#[case::cjk("\u{4e2d}\u{6587}\u{6587}\u{672c}\u{3002}")]
#[case::emoji("hi \u{1f44b}\u{1f3fd} \u{1f600}\u{1f600} \u{2764}\u{fe0f}")]
#[case::flags("\u{1f1fa}\u{1f1f8}\u{1f1eb}\u{1f1f7}\u{1f1e9}")]
#[case::format_chars("soft\u{ad}hyphen zero\u{200b}width ltr\u{200e}mark")]
#[case::separators("para\u{2029}line\u{2028}next\u{85}end")]
#[case::quotes("'quoted' \"double\" it's o'clock")]
#[case::empty("")]
fn test_matches_unicode_segmentation(#[case] text: &str) {
    let expected: Vec<&str> = text.split_word_bounds().collect();
    let actual: Vec<&str> = word_segments(text).collect();
    assert_eq!(expected, actual);
}

#[rstest]
#[case::prose("one two  three")]
#[case::punctuation("foo.bar(baz, qux);")]
#[case::multiline("alpha\n  beta\r\n gamma\n")]
fn test_word_starts_match_unicode_segmentation(#[case] text: &str) {
    let expected: Vec<usize> = text
        .split_word_bound_indices()
        .filter(|(_, s)| !s.chars().all(char::is_whitespace))
        .map(|(i, _)| i)
        .collect();
    let segmenter = Segmenter::new(text);
    let mut actual = Vec::new();
    let mut at = 0;
    if !text.is_empty() && !text.starts_with(char::is_whitespace) {
        actual.push(0);
    }
    while let Some(next) = segmenter.next_word_start(at).unwrap() {
        actual.push(next);
        at = next;
    }
    assert_eq!(expected, actual);
}

//! Randomized properties over text drawn from a boundary-heavy alphabet.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use wordbreak::*;

/// Code points covering every word-break property value, plus
/// Extended_Pictographic.
const ALPHABET: &[char] = &[
    'a', 'Z', '\u{e9}', '\u{5d0}', '\u{5d1}', '0', '7', '\u{30a2}', '_', '\u{202f}', ' ', ' ',
    '\u{3000}', '\t', '\r', '\n', '\u{b}', '\u{85}', '\u{2028}', '\'', '"', '.', ',', ';', ':',
    '\u{b7}', '\u{301}', '\u{ad}', '\u{200d}', '\u{1f1fa}', '\u{1f1f8}', '\u{1f600}', '\u{2764}',
    '\u{1f3fd}', '(', '\u{4e2d}', '!',
];

#[derive(Clone, Debug)]
struct Text(String);

impl Arbitrary for Text {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 24;
        Text((0..len).map(|_| *g.choose(ALPHABET).unwrap_or(&'a')).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let chars: Vec<char> = self.0.chars().collect();
        Box::new((0..chars.len()).map(move |skip| {
            Text(
                chars
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, &ch)| ch)
                    .collect(),
            )
        }))
    }
}

fn full_scan(text: &str) -> Vec<usize> {
    word_boundaries(text).collect()
}

fn document_start(text: &str) -> Segmenter<'_, str> {
    Segmenter::with_config(
        text,
        SegmenterConfig::default().with_context(SafeContext::DocumentStart),
    )
}

#[quickcheck]
fn scanning_is_deterministic(text: Text) -> bool {
    full_scan(&text.0) == full_scan(&text.0)
}

#[quickcheck]
fn segments_reproduce_input(text: Text) -> bool {
    word_segments(&text.0).collect::<String>() == text.0
        && word_segments(&text.0).all(|s| !s.is_empty())
}

#[quickcheck]
fn boundaries_are_ascending_char_boundaries(text: Text) -> bool {
    let boundaries = full_scan(&text.0);
    boundaries.windows(2).all(|w| w[0] < w[1])
        && boundaries.iter().all(|&b| text.0.is_char_boundary(b))
}

#[quickcheck]
fn boundary_queries_agree_with_full_scan(text: Text) -> bool {
    let text = text.0.as_str();
    let boundaries = full_scan(text);
    let by_line = Segmenter::new(text);
    let by_document = document_start(text);
    text.char_indices()
        .map(|(i, _)| i)
        .chain(Some(text.len()))
        .all(|offset| {
            let next = boundaries
                .iter()
                .copied()
                .find(|&b| b >= offset)
                .or(Some(offset));
            let prev = boundaries
                .iter()
                .copied()
                .rev()
                .find(|&b| b <= offset)
                .or(Some(offset));
            by_line.next_boundary(offset) == Ok(next)
                && by_line.prev_boundary(offset) == Ok(prev)
                && by_document.next_boundary(offset) == Ok(next)
                && by_document.prev_boundary(offset) == Ok(prev)
        })
}

#[quickcheck]
fn next_boundary_is_idempotent(text: Text) -> bool {
    let text = text.0.as_str();
    let segmenter = Segmenter::new(text);
    text.char_indices().all(|(offset, _)| {
        let next = segmenter.next_boundary(offset).unwrap();
        let prev = segmenter.prev_boundary(offset).unwrap();
        next.map(|b| segmenter.next_boundary(b).unwrap()) == Some(next)
            && prev.map(|b| segmenter.prev_boundary(b).unwrap()) == Some(prev)
    })
}

#[quickcheck]
fn range_queries_agree_with_full_scan(text: Text, a: usize, b: usize) -> bool {
    let text = text.0.as_str();
    let len = text.len() + 1;
    let (start, end) = if a % len <= b % len {
        (a % len, b % len)
    } else {
        (b % len, a % len)
    };
    let all: Vec<Segment> = document_start(text)
        .segments_in_range(0..text.len())
        .unwrap();
    let expected: Vec<Segment> = all
        .into_iter()
        .filter(|s| start < end && s.start() < end && s.end() > start)
        .collect();
    Segmenter::new(text).segments_in_range(start..end) == Ok(expected)
}

#[quickcheck]
fn chunked_text_matches_str(text: Text, cuts: Vec<usize>) -> bool {
    let chars: Vec<char> = text.0.chars().collect();
    let mut chunks = Vec::new();
    let mut idx = 0;
    for cut in cuts {
        if idx >= chars.len() {
            break;
        }
        let end = idx + 1 + cut % (chars.len() - idx);
        chunks.push(chars[idx..end].iter().collect::<String>());
        idx = end;
    }
    chunks.push(chars[idx..].iter().collect());
    let chunked: ChunkedText = chunks.into_iter().collect();
    let text = text.0.as_str();
    let from_str = Segmenter::new(text);
    let from_chunks = Segmenter::new(&chunked);
    from_str.segments_in_range(0..text.len()) == from_chunks.segments_in_range(0..text.len())
        && (0..=text.len()).all(|offset| {
            text.line_start(offset) == chunked.line_start(offset)
                && from_str.next_word_start(offset) == from_chunks.next_word_start(offset)
                && from_str.prev_word_start(offset) == from_chunks.prev_word_start(offset)
                && from_str.next_word_end(offset) == from_chunks.next_word_end(offset)
        })
}

#[quickcheck]
fn word_motions_land_on_word_starts(text: Text) -> bool {
    let text = text.0.as_str();
    let starts: Vec<usize> = document_start(text)
        .segments_in_range(0..text.len())
        .unwrap()
        .into_iter()
        .filter(|s| s.kind.is_word_like())
        .map(|s| s.start())
        .collect();
    let segmenter = Segmenter::new(text);
    (0..=text.len()).all(|offset| {
        let next = starts.iter().copied().find(|&s| s > offset);
        let prev = starts.iter().copied().rev().find(|&s| s < offset);
        segmenter.next_word_start(offset) == Ok(next)
            && segmenter.prev_word_start(offset) == Ok(prev)
    })
}

#[quickcheck]
fn classification_is_total(code: u32) -> bool {
    let ch = char::from_u32(code % 0x11_0000).unwrap_or('\u{fffd}');
    let property = classify(ch);
    property.word_break == word_break_property(ch)
        && property.extended_pictographic == is_extended_pictographic(ch)
}

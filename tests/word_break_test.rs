//! Default word boundary conformance test.

use pretty_assertions::assert_eq;
use std::fs::File;
use std::io::{self, prelude::*, BufReader};
use wordbreak::*;

const TEST_FILE: &str = "tests/WordBreakTest.txt";

struct Case {
    string: String,
    chars: Vec<String>,
    expected: Vec<usize>,
}

fn load_cases() -> io::Result<Vec<Case>> {
    let file = File::open(TEST_FILE)?;
    let mut cases = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        let mut items = line.split_whitespace();
        assert_eq!(Some("÷"), items.next(), "line: {}", line);
        let mut string = String::new();
        let mut chars = Vec::new();
        let mut expected = vec![0];
        while let Some(hex) = items.next() {
            let codepoint = u32::from_str_radix(hex, 16)
                .ok()
                .and_then(char::from_u32)
                .expect("Invalid codepoint");
            string.push(codepoint);
            chars.push(codepoint.to_string());
            match items.next() {
                Some("÷") => expected.push(string.len()),
                Some("×") => {}
                other => panic!("unexpected separator {:?} in line: {}", other, line),
            }
        }
        cases.push(Case {
            string,
            chars,
            expected,
        });
    }
    Ok(cases)
}

#[test]
fn test_wb_default() -> io::Result<()> {
    let cases = load_cases()?;
    assert_eq!(1826, cases.len());
    for case in &cases {
        let actual: Vec<_> = word_boundaries(&case.string).collect();
        assert_eq!(case.expected, actual, "String: ‘{}’", case.string.escape_unicode());
    }
    Ok(())
}

fn segment_boundaries<R: CharReader>(reader: R) -> Result<Vec<usize>, R::Error> {
    let mut boundaries = Vec::new();
    for segment in Segments::new(reader) {
        let segment = segment?;
        if boundaries.is_empty() {
            boundaries.push(segment.start());
        }
        boundaries.push(segment.end());
    }
    Ok(boundaries)
}

#[test]
fn test_wb_default_chunked() -> io::Result<()> {
    for case in load_cases()? {
        let chunked: ChunkedText = case.chars.iter().cloned().collect();
        let actual = segment_boundaries(chunked.reader_at(0).unwrap()).unwrap();
        assert_eq!(case.expected, actual, "String: ‘{}’", case.string.escape_unicode());
    }
    Ok(())
}

#[test]
fn test_wb_default_streaming() -> io::Result<()> {
    for case in load_cases()? {
        let actual = segment_boundaries(Utf8Reader::new(case.string.as_bytes())).unwrap();
        assert_eq!(case.expected, actual, "String: ‘{}’", case.string.escape_unicode());
    }
    Ok(())
}

#[test]
fn test_wb_default_queries() -> io::Result<()> {
    for case in load_cases()? {
        let text = case.string.as_str();
        let segmenter = Segmenter::new(text);
        for (offset, _) in text.char_indices() {
            let next = case.expected.iter().copied().find(|&b| b >= offset);
            let prev = case.expected.iter().copied().rev().find(|&b| b <= offset);
            assert_eq!(
                next,
                segmenter.next_boundary(offset).unwrap(),
                "next from {} in ‘{}’",
                offset,
                text.escape_unicode()
            );
            assert_eq!(
                prev,
                segmenter.prev_boundary(offset).unwrap(),
                "prev from {} in ‘{}’",
                offset,
                text.escape_unicode()
            );
        }
    }
    Ok(())
}

use std::str;

pub(crate) const MAX_BYTE_COUNT: usize = 4;

const TAG_CONT: u8 = 0b1000_0000;
const TAG_TWO_B: u8 = 0b1100_0000;
const TAG_THREE_B: u8 = 0b1110_0000;
const TAG_FOUR_B: u8 = 0b1111_0000;
const TAG_FIVE_B: u8 = 0b1111_1000;

const CONT_PREFIX_MASK: u8 = 0b1100_0000;

/// Length of the sequence a leading byte announces, or `None` if `v` cannot
/// start a UTF-8 sequence.
pub(crate) fn len_from_first_byte(v: u8) -> Option<usize> {
    if v < 0x80 {
        Some(1)
    } else if v & TAG_FIVE_B == TAG_FOUR_B {
        Some(4)
    } else if v & TAG_FOUR_B == TAG_THREE_B {
        Some(3)
    } else if v & TAG_THREE_B == TAG_TWO_B {
        Some(2)
    } else {
        None
    }
}

pub(crate) fn is_cont_byte(v: u8) -> bool {
    (v & CONT_PREFIX_MASK) == TAG_CONT
}

/// Decodes one complete sequence. Rejects overlong forms and surrogates.
pub(crate) fn decode_char(bytes: &[u8]) -> Option<char> {
    let mut chars = str::from_utf8(bytes).ok()?.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_from_first_byte() {
        for ch in ['a', '\u{e9}', '\u{2028}', '\u{1f600}'] {
            let mut buf = [0; MAX_BYTE_COUNT];
            let encoded = ch.encode_utf8(&mut buf);
            assert_eq!(Some(encoded.len()), len_from_first_byte(encoded.as_bytes()[0]));
            assert!(encoded.as_bytes()[1..].iter().all(|&b| is_cont_byte(b)));
            assert_eq!(Some(ch), decode_char(encoded.as_bytes()));
        }
        assert_eq!(None, len_from_first_byte(0x80));
        assert_eq!(None, len_from_first_byte(0xf8));
    }

    #[test]
    fn test_decode_rejects_invalid() {
        // overlong '/'
        assert_eq!(None, decode_char(&[0xc0, 0xaf]));
        // surrogate half
        assert_eq!(None, decode_char(&[0xed, 0xa0, 0x80]));
        assert_eq!(None, decode_char(b"ab"));
    }
}

//! Byte classification tables.
//!
//! Each class is a 256-entry lookup table built at compile time, so the hot
//! scanning loops do a single indexed read per byte instead of a multi-arm
//! `matches!`.

const WHITESPACE: u8 = 1 << 0;
const DELIMITER: u8 = 1 << 1;
const NUMERIC: u8 = 1 << 2;
const HEX_DIGIT: u8 = 1 << 3;
const SEPARATOR: u8 = 1 << 4;

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static CLASS_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0u16;
    while i < 256 {
        let b = i as u8;
        let mut class = 0;
        // NUL, HT, LF, FF, CR, SP
        if matches!(b, 0x00 | 0x09 | 0x0A | 0x0C | 0x0D | 0x20) {
            class |= WHITESPACE;
        }
        if matches!(
            b,
            b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
        ) {
            class |= DELIMITER;
        }
        if matches!(b, b'0'..=b'9' | b'+' | b'-' | b'.') {
            class |= NUMERIC;
        }
        if b.is_ascii_hexdigit() {
            class |= HEX_DIGIT;
        }
        // Separators between the parts of `12 0 R` / `12 0 obj`: HT, LF, VT, FF, CR, SP.
        if matches!(b, 0x09..=0x0D | 0x20) {
            class |= SEPARATOR;
        }
        table[i as usize] = class;
        i += 1;
    }
    table
};

#[inline]
fn has(b: u8, class: u8) -> bool {
    CLASS_TABLE[b as usize] & class != 0
}

/// PDF whitespace: NUL, tab, line feed, form feed, carriage return, space.
#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    has(b, WHITESPACE)
}

/// A byte that may appear in a name body: not whitespace, not a separator
/// (which adds VT), not a delimiter.
#[inline]
pub(crate) fn is_name_byte(b: u8) -> bool {
    !has(b, WHITESPACE | SEPARATOR | DELIMITER)
}

/// Digits, signs, and the decimal point.
#[inline]
pub(crate) fn is_numeric(b: u8) -> bool {
    has(b, NUMERIC)
}

/// Content allowed between `<` and `>` of a hex string.
#[inline]
pub(crate) fn is_hex_body(b: u8) -> bool {
    has(b, HEX_DIGIT) || (has(b, WHITESPACE) && b != 0)
}

#[inline]
pub(crate) fn is_separator(b: u8) -> bool {
    has(b, SEPARATOR)
}

/// Length of the leading run of bytes satisfying `pred`.
#[inline]
pub(crate) fn run_len(bytes: &[u8], pred: impl Fn(u8) -> bool) -> usize {
    bytes.iter().take_while(|&&b| pred(b)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_set_is_exactly_six_bytes() {
        let ws: Vec<u8> = (0..=255u8).filter(|&b| is_whitespace(b)).collect();
        assert_eq!(ws, vec![0x00, 0x09, 0x0A, 0x0C, 0x0D, 0x20]);
    }

    #[test]
    fn name_bytes_exclude_delimiters_and_whitespace() {
        for b in b"()<>[]{}/%" {
            assert!(!is_name_byte(*b), "{:?} should end a name", *b as char);
        }
        for b in [0x00, b'\t', b'\n', 0x0B, 0x0C, b'\r', b' '] {
            assert!(!is_name_byte(b));
        }
        assert!(is_name_byte(b'#'));
        assert!(is_name_byte(b'A'));
        assert!(is_name_byte(0xE9));
    }

    #[test]
    fn hex_body_excludes_nul() {
        assert!(is_hex_body(b'a'));
        assert!(is_hex_body(b'F'));
        assert!(is_hex_body(b' '));
        assert!(!is_hex_body(0x00));
        assert!(!is_hex_body(b'g'));
    }

    #[test]
    fn separator_includes_vertical_tab_but_not_nul() {
        assert!(is_separator(0x0B));
        assert!(!is_separator(0x00));
    }

    #[test]
    fn run_len_counts_prefix_only() {
        assert_eq!(run_len(b"12.5 7", is_numeric), 4);
        assert_eq!(run_len(b"", is_numeric), 0);
        assert_eq!(run_len(b"x1", is_numeric), 0);
    }
}

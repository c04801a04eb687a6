//! Property tests for termination, round-trips, and window boundaries.

#![allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]

mod common;

use std::io::Cursor;

use pdf_lexer_core::{scan_token, scan_token_with, ScanConfig, Scanner, TokenKind};
use proptest::prelude::*;

/// Bytes that show up in PDF syntax, weighted so structure actually forms.
fn syntax_byte() -> impl Strategy<Value = u8> {
    prop_oneof![
        4 => prop::sample::select(b" \n\r\t\x00\x0c/()<>[]{}%\\0123456789.-+Rbjendstrmaulfo".to_vec()),
        1 => any::<u8>(),
    ]
}

proptest! {
    #[test]
    fn walking_any_input_terminates(
        bytes in prop::collection::vec(syntax_byte(), 0..512),
        block_size in 1usize..64,
    ) {
        common::init_tracing();
        let config = ScanConfig::default().with_block_size(block_size);
        let mut source = Cursor::new(&bytes[..]);
        let mut previous = 0;
        let mut steps = 0;
        for token in Scanner::with_config(&mut source, config).unwrap().tokens(0) {
            let token = token.unwrap();
            prop_assert!(token.next_offset > previous);
            prop_assert!(token.next_offset <= bytes.len() as u64);
            previous = token.next_offset;
            steps += 1;
        }
        prop_assert!(steps <= bytes.len());
    }

    #[test]
    fn block_size_does_not_change_tokens(
        bytes in prop::collection::vec(syntax_byte(), 0..256),
        block_size in 1usize..16,
    ) {
        let small = ScanConfig::default().with_block_size(block_size);
        let reference = scan_token(&mut Cursor::new(&bytes[..]), 0).unwrap();
        let chunked = scan_token_with(&mut Cursor::new(&bytes[..]), 0, &small).unwrap();
        prop_assert_eq!(reference, chunked);
    }

    #[test]
    fn name_round_trips(name in "[A-Za-z0-9_.+-]{1,200}") {
        let input = format!("/{name} ");
        let token = scan_token(&mut Cursor::new(input.as_bytes()), 0).unwrap();
        prop_assert_eq!(token.kind, TokenKind::Name);
        let mut serialized = b"/".to_vec();
        serialized.extend_from_slice(token.bytes().unwrap());
        prop_assert_eq!(&serialized[..], &input.as_bytes()[..input.len() - 1]);
        prop_assert_eq!(token.next_offset, name.len() as u64 + 1);
    }

    #[test]
    fn whitespace_near_block_boundary_is_skipped(
        run in prop::collection::vec(
            prop::sample::select(b" \t\r\n\x0c\x00".to_vec()),
            1000..1100,
        ),
    ) {
        let mut input = run.clone();
        input.extend_from_slice(b"/X");
        let token = scan_token(&mut Cursor::new(&input[..]), 0).unwrap();
        prop_assert_eq!(token.kind, TokenKind::Name);
        prop_assert_eq!(token.next_offset, run.len() as u64 + 2);
    }

    #[test]
    fn reference_recognized_only_inside_window(gap in 1usize..40) {
        let input = format!("12{}0 R", " ".repeat(gap));
        let token = scan_token(&mut Cursor::new(input.as_bytes()), 0).unwrap();
        if input.len() <= 33 {
            prop_assert_eq!(token.kind, TokenKind::IndirectRef);
            prop_assert_eq!(token.next_offset, input.len() as u64);
        } else {
            prop_assert_eq!(token.kind, TokenKind::Numeric);
            prop_assert_eq!(token.next_offset, 2);
        }
    }

    #[test]
    fn numbers_keep_every_digit(digits in "[0-9]{1,3000}") {
        let input = format!("{digits} ");
        let token = scan_token(&mut Cursor::new(input.as_bytes()), 0).unwrap();
        prop_assert_eq!(token.bytes(), Some(digits.as_bytes()));
    }

    #[test]
    fn plain_literal_string_content_survives(
        content in prop::collection::vec(
            any::<u8>().prop_filter("no parens or escapes", |b| !b"()\\".contains(b)),
            0..3000,
        ),
        block_size in 1usize..2048,
    ) {
        let mut input = b"(".to_vec();
        input.extend_from_slice(&content);
        input.push(b')');
        let config = ScanConfig::default().with_block_size(block_size);
        let token = scan_token_with(&mut Cursor::new(&input[..]), 0, &config).unwrap();
        prop_assert_eq!(token.bytes(), Some(&content[..]));
        prop_assert_eq!(token.next_offset, input.len() as u64);
    }

    #[test]
    fn stream_payload_survives(
        payload in prop::collection::vec(
            any::<u8>().prop_filter("no keyword start or CR", |b| *b != b'e' && *b != b'\r'),
            0..3000,
        ),
        block_size in 1usize..2048,
    ) {
        let mut input = b"stream\n".to_vec();
        input.extend_from_slice(&payload);
        input.extend_from_slice(b"\nendstream\nendobj");
        let config = ScanConfig::default().with_block_size(block_size);
        let token = scan_token_with(&mut Cursor::new(&input[..]), 0, &config).unwrap();
        prop_assert_eq!(token.kind, TokenKind::Stream);
        prop_assert_eq!(token.bytes(), Some(&payload[..]));
        prop_assert_eq!(token.next_offset, input.len() as u64 - 6);
    }
}

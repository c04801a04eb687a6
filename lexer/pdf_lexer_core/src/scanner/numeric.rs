//! Numbers, indirect references, and object headers.

use super::Scanner;
use crate::byte_class::{is_numeric, is_separator, run_len};
use crate::error::ScanResult;
use crate::reader::widen;
use crate::source::ByteSource;
use crate::token::{ObjectId, Token, TokenKind, TokenValue};

impl<S: ByteSource + ?Sized> Scanner<'_, S> {
    /// Scan `<obj> <gen> R`, `<obj> <gen> obj`, or a number at `at`.
    ///
    /// The two object patterns must fit inside the reference window; they
    /// are never extended. A number that fills the whole window keeps
    /// growing block by block, so digit runs of any length survive intact.
    ///
    /// Returns `Unrecognized` at `at` when nothing matches.
    pub(super) fn numeric_or_reference(&mut self, at: u64) -> ScanResult<Token> {
        let window_len = self.config.reference_window;
        let window = self.reader.read_block(at, window_len)?;

        if let Some((id, len)) = object_pattern(&window, b"R") {
            return Ok(Token::new(TokenKind::IndirectRef, TokenValue::Id(id), at + widen(len)));
        }
        if let Some((id, len)) = object_pattern(&window, b"obj") {
            return Ok(Token::new(TokenKind::ObjectStart, TokenValue::Id(id), at + widen(len)));
        }

        let run = run_len(&window, is_numeric);
        if run == 0 {
            return Ok(Token::empty(TokenKind::Unrecognized, at));
        }
        let mut text = window[..run].to_vec();
        if run == window_len {
            loop {
                let block = self.reader.next_block()?;
                let more = run_len(&block, is_numeric);
                text.extend_from_slice(&block[..more]);
                if more < block.len() || self.is_last_block(&block) {
                    break;
                }
            }
        }
        let next = at + widen(text.len());
        Ok(Token::bytes_value(TokenKind::Numeric, text, next))
    }
}

/// Match `<digits> <ws> <digits> <ws> <suffix>` at the start of `window`,
/// with the suffix compared ignoring ASCII case.
///
/// Returns the id and the length of the whole match.
fn object_pattern(window: &[u8], suffix: &[u8]) -> Option<(ObjectId, usize)> {
    let number = run_len(window, |b| b.is_ascii_digit());
    if number == 0 {
        return None;
    }
    let mut i = number;

    let gap = run_len(&window[i..], is_separator);
    if gap == 0 {
        return None;
    }
    i += gap;

    let generation_start = i;
    let generation = run_len(&window[i..], |b| b.is_ascii_digit());
    if generation == 0 {
        return None;
    }
    i += generation;

    let gap = run_len(&window[i..], is_separator);
    if gap == 0 {
        return None;
    }
    i += gap;

    if !window
        .get(i..i + suffix.len())
        .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
    {
        return None;
    }
    let id = ObjectId::from_digits(
        &window[..number],
        &window[generation_start..generation_start + generation],
    );
    Some((id, i + suffix.len()))
}

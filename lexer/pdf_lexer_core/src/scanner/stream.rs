//! Stream payloads between `stream` and `endstream`.
//!
//! The payload is located by keyword search alone. The `/Length` entry of
//! the stream dictionary is not consulted; resolving it is up to the
//! consumer.

use memchr::memmem;
use tracing::debug;

use super::Scanner;
use crate::byte_class::is_whitespace;
use crate::error::ScanResult;
use crate::reader::widen;
use crate::source::ByteSource;
use crate::token::{ScanStatus, Token, TokenKind};

const END_KEYWORD: &[u8] = b"endstream";

impl<S: ByteSource + ?Sized> Scanner<'_, S> {
    /// Scan the payload following a `stream` keyword that ends at
    /// `after_keyword`.
    ///
    /// The keyword must be followed by `\n` or `\r\n`; otherwise no payload
    /// is extracted and the token is `UnstartedStream`. The terminator is the
    /// first `endstream` followed by whitespace or end-of-resource. The
    /// end-of-line marker before it is not part of the payload, and the
    /// token resumes one byte past the keyword.
    ///
    /// Without a terminator the payload runs to end-of-resource and the token
    /// is `Truncated`.
    pub(super) fn stream(&mut self, after_keyword: u64) -> ScanResult<Token> {
        // At least two bytes so `\r\n` is never split across the first read.
        let first_len = self.config.block_size.max(2);
        let first = self.reader.read_block(after_keyword, first_len)?;
        let eol = match first.as_slice() {
            [] => {
                debug!(offset = after_keyword, "stream keyword at end of resource");
                return Ok(Token::empty(TokenKind::Stream, after_keyword)
                    .with_status(ScanStatus::Truncated));
            }
            [b'\n', ..] => 1,
            [b'\r', b'\n', ..] => 2,
            _ => {
                debug!(offset = after_keyword, "stream keyword not followed by an end-of-line marker");
                return Ok(Token::empty(TokenKind::Stream, after_keyword)
                    .with_status(ScanStatus::UnstartedStream));
            }
        };

        let payload_start = after_keyword + widen(eol);
        let mut at_end = first.len() < first_len;
        let mut data = first[eol..].to_vec();
        let mut searched = 0;

        loop {
            // A candidate whose next byte is not read yet.
            let mut pending = None;
            while let Some(hit) = memmem::find(&data[searched..], END_KEYWORD) {
                let idx = searched + hit;
                match data.get(idx + END_KEYWORD.len()) {
                    Some(&b) if is_whitespace(b) => {
                        let next = payload_start + widen(idx + END_KEYWORD.len() + 1);
                        return Ok(finish(data, idx, next));
                    }
                    Some(_) => {
                        debug!(offset = payload_start + widen(idx), "endstream inside payload skipped");
                        searched = idx + 1;
                    }
                    None => {
                        pending = Some(idx);
                        break;
                    }
                }
            }

            if at_end {
                let end = payload_start + widen(data.len());
                if let Some(idx) = pending {
                    return Ok(finish(data, idx, end));
                }
                debug!(offset = payload_start, end, "stream cut off by end of resource");
                return Ok(Token::bytes_value(TokenKind::Stream, data, end)
                    .with_status(ScanStatus::Truncated));
            }

            // The next match can start no earlier than the last partial keyword.
            searched = pending.unwrap_or_else(|| {
                searched.max(data.len().saturating_sub(END_KEYWORD.len() - 1))
            });
            let block = self.reader.next_block()?;
            at_end = self.is_last_block(&block);
            data.extend_from_slice(&block);
        }
    }
}

/// Cut `data` down to the payload before the `endstream` at `terminator`.
fn finish(mut data: Vec<u8>, terminator: usize, next: u64) -> Token {
    data.truncate(terminator);
    if data.ends_with(b"\r\n") {
        data.truncate(terminator - 2);
    } else if data.ends_with(b"\n") || data.ends_with(b"\r") {
        data.truncate(terminator - 1);
    }
    Token::bytes_value(TokenKind::Stream, data, next)
}

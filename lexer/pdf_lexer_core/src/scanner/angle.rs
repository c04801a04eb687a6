//! `<` and `>`: dictionaries versus hex strings.

use memchr::memchr;
use tracing::debug;

use super::{stray, Scanner};
use crate::byte_class::is_hex_body;
use crate::error::ScanResult;
use crate::reader::widen;
use crate::source::ByteSource;
use crate::token::{ScanStatus, Token, TokenKind, TokenValue};

impl<S: ByteSource + ?Sized> Scanner<'_, S> {
    /// Disambiguate the angle bracket `lead` at `at`.
    ///
    /// A doubled bracket is a dictionary delimiter; `<<` opens a dictionary
    /// and `>>` is the close sentinel. A single `<` opens a hex string; a
    /// single `>` closes nothing.
    pub(super) fn angle(&mut self, at: u64, lead: u8) -> ScanResult<Token> {
        let pair = self.reader.read_block(at, 2)?;
        if pair.get(1) == Some(&lead) {
            return match lead {
                b'<' => self.dictionary(at + 2),
                _ => Ok(Token::empty(TokenKind::DictClose, at + 2)),
            };
        }
        match lead {
            b'<' => self.hex_string(at + 1),
            _ => Ok(stray(TokenKind::HexString, at)),
        }
    }

    /// Scan a hex string body starting at `start`, just after `<`.
    ///
    /// The body is checked one block at a time. Once a block holds anything
    /// other than hex digits and whitespace, the value is dropped but the
    /// scan still runs to `>` so the offset moves past the string.
    fn hex_string(&mut self, start: u64) -> ScanResult<Token> {
        let mut pos = start;
        let mut digits = Vec::new();
        let mut valid = true;

        loop {
            let block = self.reader.block_at(pos)?;
            let close = memchr(b'>', &block);
            let body = &block[..close.unwrap_or(block.len())];

            if valid {
                if body.iter().all(|&b| is_hex_body(b)) {
                    digits.extend(body.iter().copied().filter(u8::is_ascii_hexdigit));
                } else {
                    debug!(offset = start, block = pos, "hex string holds non-hex bytes");
                    valid = false;
                    digits.clear();
                }
            }

            if let Some(close) = close {
                let next = pos + widen(close) + 1;
                return Ok(if valid {
                    Token::bytes_value(TokenKind::HexString, digits, next)
                } else {
                    Token::empty(TokenKind::HexString, next).with_status(ScanStatus::InvalidContent)
                });
            }

            pos += widen(block.len());
            if self.is_last_block(&block) {
                debug!(offset = start, end = pos, "hex string cut off by end of resource");
                let value = if valid {
                    TokenValue::Bytes(digits)
                } else {
                    TokenValue::Empty
                };
                return Ok(Token::new(TokenKind::HexString, value, pos).with_status(ScanStatus::Truncated));
            }
        }
    }
}

//! Literal strings: balanced parentheses with backslash escapes.

use memchr::memchr3;
use tracing::debug;

use super::Scanner;
use crate::error::ScanResult;
use crate::reader::widen;
use crate::source::ByteSource;
use crate::token::{ScanStatus, Token, TokenKind};

impl<S: ByteSource + ?Sized> Scanner<'_, S> {
    /// Scan the literal string whose `(` is at `at`.
    ///
    /// A backslash skips the byte after it without interpreting it. Unescaped
    /// parentheses nest. The value is the raw content between the outer
    /// parentheses. If the resource ends first, the value is everything read
    /// and the token is `Truncated` at end-of-resource.
    pub(super) fn literal_string(&mut self, at: u64) -> ScanResult<Token> {
        let mut pos = at + 1;
        let mut depth: u64 = 1;
        // A backslash ended the previous block; its operand leads this one.
        let mut escape_pending = false;
        let mut value = Vec::new();

        loop {
            let block = self.reader.block_at(pos)?;
            let mut i = 0;
            if escape_pending && !block.is_empty() {
                escape_pending = false;
                i = 1;
            }

            while let Some(hit) = memchr3(b'\\', b'(', b')', &block[i..]) {
                let j = i + hit;
                match block[j] {
                    b'\\' if j + 1 < block.len() => i = j + 2,
                    b'\\' => {
                        escape_pending = true;
                        i = block.len();
                    }
                    b'(' => {
                        depth += 1;
                        i = j + 1;
                    }
                    _ => {
                        depth -= 1;
                        if depth == 0 {
                            value.extend_from_slice(&block[..j]);
                            let next = pos + widen(j) + 1;
                            return Ok(Token::bytes_value(TokenKind::LiteralString, value, next));
                        }
                        i = j + 1;
                    }
                }
            }

            value.extend_from_slice(&block);
            pos += widen(block.len());
            if self.is_last_block(&block) {
                debug!(offset = at, end = pos, depth, "literal string cut off by end of resource");
                return Ok(Token::bytes_value(TokenKind::LiteralString, value, pos)
                    .with_status(ScanStatus::Truncated));
            }
        }
    }
}

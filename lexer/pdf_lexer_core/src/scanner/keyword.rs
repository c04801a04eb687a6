//! Fixed keywords: `endobj`, `null`, `true`, `false`, `stream`, `endstream`.

use super::Scanner;
use crate::error::ScanResult;
use crate::reader::widen;
use crate::source::ByteSource;
use crate::token::{Token, TokenKind};

/// Keywords in match priority order.
const KEYWORDS: [(&[u8], TokenKind); 6] = [
    (b"endobj", TokenKind::EndObject),
    (b"null", TokenKind::Null),
    (b"true", TokenKind::Boolean),
    (b"false", TokenKind::Boolean),
    (b"stream", TokenKind::Stream),
    (b"endstream", TokenKind::EndStream),
];

impl<S: ByteSource + ?Sized> Scanner<'_, S> {
    /// Prefix-match a keyword at `at`.
    ///
    /// Returns `None` when no keyword matches, so the caller can fall back to
    /// the numeric scanner. `null`, `true`, and `false` carry their text;
    /// `endobj` and `endstream` are empty. `stream` continues into the
    /// payload scan.
    pub(super) fn keyword(&mut self, at: u64) -> ScanResult<Option<Token>> {
        let window = self.reader.read_block(at, self.config.keyword_window)?;
        let Some(&(keyword, kind)) = KEYWORDS.iter().find(|(kw, _)| window.starts_with(kw)) else {
            return Ok(None);
        };
        let next = at + widen(keyword.len());
        let token = match kind {
            TokenKind::Stream => return self.stream(next).map(Some),
            TokenKind::EndObject | TokenKind::EndStream => Token::empty(kind, next),
            _ => Token::bytes_value(kind, keyword.to_vec(), next),
        };
        Ok(Some(token))
    }
}

//! Arrays and dictionaries.
//!
//! Both are scanned the same way: child tokens are scanned one after another
//! until the matching close sentinel. Child N+1 starts where child N ended,
//! so the children are strictly sequential.

use tracing::debug;

use super::Scanner;
use crate::error::ScanResult;
use crate::source::ByteSource;
use crate::stack::ensure_sufficient_stack;
use crate::token::{ScanStatus, Token, TokenKind, TokenValue};

impl<S: ByteSource + ?Sized> Scanner<'_, S> {
    /// Scan the array whose `[` is at `at`.
    pub(super) fn array(&mut self, at: u64) -> ScanResult<Token> {
        self.container(at + 1, TokenKind::ArrayOpen, TokenKind::ArrayClose)
    }

    /// Scan the dictionary whose body starts at `start`, just after `<<`.
    ///
    /// Keys and values are collected as one flat sequence; pairing them is
    /// left to the consumer.
    pub(super) fn dictionary(&mut self, start: u64) -> ScanResult<Token> {
        self.container(start, TokenKind::DictOpen, TokenKind::DictClose)
    }

    fn container(&mut self, start: u64, kind: TokenKind, close: TokenKind) -> ScanResult<Token> {
        ensure_sufficient_stack(|| {
            let mut children = Vec::new();
            let mut offset = start;
            loop {
                let child = self.scan_token(offset)?;
                if child.kind == close {
                    return Ok(Token::new(kind, TokenValue::Children(children), child.next_offset));
                }
                if child.kind == TokenKind::Unrecognized || child.next_offset <= offset {
                    let resume = child.next_offset.max(offset);
                    debug!(%kind, offset = start, resume, "container ended without its close delimiter");
                    return Ok(Token::new(kind, TokenValue::Children(children), resume)
                        .with_status(ScanStatus::Truncated));
                }
                offset = child.next_offset;
                children.push(child);
            }
        })
    }
}

//! Offset-driven token scanner.
//!
//! [`Scanner::scan_token`] skips whitespace and comments from an absolute
//! offset, classifies the first significant byte, and hands off to one of
//! the specialized scanners:
//!
//! | Lead byte | Scanner |
//! |-----------|---------|
//! | `/` | name |
//! | `(` `)` | literal string |
//! | `[` `]` | array |
//! | `<` `>` | hex string or dictionary |
//! | anything else | keyword, then numeric / reference |
//!
//! Every scanner takes the offset it starts at and returns a fresh [`Token`]
//! whose `next_offset` says where to resume. The byte source is the only
//! mutable state; it is held exclusively for the lifetime of the `Scanner`.

mod angle;
mod container;
mod keyword;
mod literal;
mod name;
mod numeric;
mod stream;

use std::iter::FusedIterator;

use memchr::memchr2;
use tracing::{debug, trace};

use crate::byte_class::{is_whitespace, run_len};
use crate::config::ScanConfig;
use crate::error::{ConfigError, ScanResult};
use crate::reader::{widen, ChunkedReader};
use crate::source::ByteSource;
use crate::token::{ScanStatus, Token, TokenKind};

/// Scan the token at `offset` with the default configuration.
///
/// The entry point for document-level consumers: call it repeatedly, feeding
/// each token's `next_offset` into the next call.
pub fn scan_token<S: ByteSource + ?Sized>(source: &mut S, offset: u64) -> ScanResult<Token> {
    Scanner::new(source).scan_token(offset)
}

/// Scan the token at `offset` with an explicit configuration.
pub fn scan_token_with<S: ByteSource + ?Sized>(
    source: &mut S,
    offset: u64,
    config: &ScanConfig,
) -> ScanResult<Token> {
    Scanner::with_config(source, *config)?.scan_token(offset)
}

/// First significant position after whitespace.
enum Lead {
    Byte { at: u64, byte: u8 },
    End(u64),
}

/// Token scanner over an exclusively borrowed byte source.
pub struct Scanner<'s, S: ?Sized> {
    reader: ChunkedReader<'s, S>,
    config: ScanConfig,
}

impl<'s, S: ByteSource + ?Sized> Scanner<'s, S> {
    pub fn new(source: &'s mut S) -> Self {
        Self {
            reader: ChunkedReader::new(source, ScanConfig::DEFAULT.block_size),
            config: ScanConfig::DEFAULT,
        }
    }

    pub fn with_config(source: &'s mut S, config: ScanConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            reader: ChunkedReader::new(source, config.block_size),
            config,
        })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan one token starting at `offset`.
    ///
    /// Whitespace and comments before the token are skipped. At end of
    /// input, or when no rule matches, returns an `Unrecognized` token whose
    /// `next_offset` is the first significant position; callers must treat
    /// it as terminal.
    pub fn scan_token(&mut self, offset: u64) -> ScanResult<Token> {
        let mut at = offset;
        loop {
            match self.skip_whitespace(at)? {
                Lead::End(end) => return Ok(Token::empty(TokenKind::Unrecognized, end)),
                Lead::Byte { at: pos, byte: b'%' } => at = self.skip_comment(pos)?,
                Lead::Byte { at: pos, byte } => return self.dispatch(pos, byte),
            }
        }
    }

    /// Iterate over successive tokens starting at `offset`.
    pub fn tokens(self, offset: u64) -> Tokens<'s, S> {
        Tokens {
            scanner: self,
            offset,
            done: false,
        }
    }

    fn dispatch(&mut self, at: u64, lead: u8) -> ScanResult<Token> {
        trace!(offset = at, lead, "dispatch");
        match lead {
            b'/' => self.name(at),
            b'(' => self.literal_string(at),
            b')' => Ok(stray(TokenKind::LiteralString, at)),
            b'[' => self.array(at),
            b']' => Ok(Token::empty(TokenKind::ArrayClose, at + 1)),
            b'<' | b'>' => self.angle(at, lead),
            _ => match self.keyword(at)? {
                Some(token) => Ok(token),
                None => self.numeric_or_reference(at),
            },
        }
    }

    /// Advance past a whitespace run of any length.
    fn skip_whitespace(&mut self, offset: u64) -> ScanResult<Lead> {
        let mut at = offset;
        loop {
            let block = self.reader.block_at(at)?;
            let ws = run_len(&block, is_whitespace);
            at += widen(ws);
            if let Some(&byte) = block.get(ws) {
                return Ok(Lead::Byte { at, byte });
            }
            if self.is_last_block(&block) {
                return Ok(Lead::End(at));
            }
        }
    }

    /// Offset of the line terminator ending the comment at `at`, or
    /// end-of-resource.
    fn skip_comment(&mut self, at: u64) -> ScanResult<u64> {
        let mut pos = at;
        loop {
            let block = self.reader.block_at(pos)?;
            if let Some(eol) = memchr2(b'\r', b'\n', &block) {
                return Ok(pos + widen(eol));
            }
            pos += widen(block.len());
            if self.is_last_block(&block) {
                return Ok(pos);
            }
        }
    }

    /// A block shorter than the block size was cut off by end-of-resource.
    #[inline]
    fn is_last_block(&self, block: &[u8]) -> bool {
        block.len() < self.config.block_size
    }
}

/// A closing delimiter with nothing to close.
fn stray(kind: TokenKind, at: u64) -> Token {
    debug!(offset = at, %kind, "stray closing delimiter");
    Token::empty(kind, at + 1).with_status(ScanStatus::StrayDelimiter)
}

/// Successive top-level tokens from a starting offset.
///
/// Ends before the first `Unrecognized` token, and after yielding the first
/// hard error. Also ends if a token fails to advance the offset.
pub struct Tokens<'s, S: ?Sized> {
    scanner: Scanner<'s, S>,
    offset: u64,
    done: bool,
}

impl<S: ByteSource + ?Sized> Tokens<'_, S> {
    /// Offset the next token would be scanned from.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl<S: ByteSource + ?Sized> Iterator for Tokens<'_, S> {
    type Item = ScanResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.scanner.scan_token(self.offset) {
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
            Ok(token) if token.kind == TokenKind::Unrecognized => {
                self.done = true;
                self.offset = token.next_offset;
                None
            }
            Ok(token) if token.next_offset <= self.offset => {
                self.done = true;
                None
            }
            Ok(token) => {
                self.offset = token.next_offset;
                Some(Ok(token))
            }
        }
    }
}

impl<S: ByteSource + ?Sized> FusedIterator for Tokens<'_, S> {}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]

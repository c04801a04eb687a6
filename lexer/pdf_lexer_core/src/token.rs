//! Token model produced by the scanner.
//!
//! A [`Token`] owns its value outright. Nothing in it borrows from the
//! reader, so tokens outlive the scan call that produced them.

use std::borrow::Cow;
use std::fmt;

/// Classification of a scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// `/Name`
    Name,
    /// `( ... )`
    LiteralString,
    /// `< ... >`
    HexString,
    /// `[ ... ]`; the value holds the elements.
    ArrayOpen,
    /// `]`
    ArrayClose,
    /// `<< ... >>`; the value holds alternating keys and values.
    DictOpen,
    /// `>>`
    DictClose,
    /// `12 0 R`
    IndirectRef,
    /// `12 0 obj`
    ObjectStart,
    /// `endobj`
    EndObject,
    /// `null`
    Null,
    /// `true` / `false`
    Boolean,
    /// `stream ... endstream`; the value holds the raw payload.
    Stream,
    /// A bare `endstream`.
    EndStream,
    /// Integer or real, kept as text.
    Numeric,
    /// No rule matched, or the resource is exhausted.
    Unrecognized,
}

impl TokenKind {
    /// Returns `true` for the close sentinels `]` and `>>`.
    pub fn is_close(self) -> bool {
        matches!(self, TokenKind::ArrayClose | TokenKind::DictClose)
    }

    /// Returns `true` for kinds whose value is a child sequence.
    pub fn is_container(self) -> bool {
        matches!(self, TokenKind::ArrayOpen | TokenKind::DictOpen)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Name => "name",
            TokenKind::LiteralString => "literal string",
            TokenKind::HexString => "hex string",
            TokenKind::ArrayOpen => "array",
            TokenKind::ArrayClose => "]",
            TokenKind::DictOpen => "dictionary",
            TokenKind::DictClose => ">>",
            TokenKind::IndirectRef => "indirect reference",
            TokenKind::ObjectStart => "obj",
            TokenKind::EndObject => "endobj",
            TokenKind::Null => "null",
            TokenKind::Boolean => "boolean",
            TokenKind::Stream => "stream",
            TokenKind::EndStream => "endstream",
            TokenKind::Numeric => "numeric",
            TokenKind::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Object number and generation of an indirect object.
///
/// Displays as `"<number>_<generation>"`. Digit runs too long for `u64`
/// saturate at `u64::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectId {
    pub number: u64,
    pub generation: u64,
}

impl ObjectId {
    pub fn new(number: u64, generation: u64) -> Self {
        Self { number, generation }
    }

    /// Interpret two ASCII digit runs as an id.
    pub(crate) fn from_digits(number: &[u8], generation: &[u8]) -> Self {
        Self::new(saturating_digits(number), saturating_digits(generation))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.number, self.generation)
    }
}

fn saturating_digits(digits: &[u8]) -> u64 {
    digits.iter().fold(0u64, |acc, &d| {
        acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
    })
}

/// Kind-dependent payload of a token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenValue {
    /// Close sentinels, `endobj`, `endstream`, and discarded values.
    #[default]
    Empty,
    /// Raw bytes: name text, number text, keyword text, unescaped string
    /// content, whitespace-stripped hex digits, or a stream payload.
    Bytes(Vec<u8>),
    /// Indirect reference or object start.
    Id(ObjectId),
    /// Array elements or dictionary entries, closing marker excluded.
    Children(Vec<Token>),
}

impl TokenValue {
    pub fn is_empty(&self) -> bool {
        match self {
            TokenValue::Empty => true,
            TokenValue::Bytes(bytes) => bytes.is_empty(),
            TokenValue::Id(_) => false,
            TokenValue::Children(children) => children.is_empty(),
        }
    }
}

/// How completely a token was recognised.
///
/// Everything except `Complete` is a tolerated degradation of malformed or
/// truncated input. Consumers that want strict parsing reject those tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanStatus {
    #[default]
    Complete,
    /// The resource ended mid-token, or a name overran its window.
    Truncated,
    /// Hex string body held non-hex bytes; the value was discarded.
    InvalidContent,
    /// `stream` was not followed by `\n` or `\r\n`; no payload extracted.
    UnstartedStream,
    /// A `)` or `>` that closes nothing.
    StrayDelimiter,
}

/// One classified unit of raw syntax.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// Absolute offset immediately after the token.
    pub next_offset: u64,
    pub status: ScanStatus,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue, next_offset: u64) -> Self {
        Self {
            kind,
            value,
            next_offset,
            status: ScanStatus::Complete,
        }
    }

    /// Token with an empty value.
    pub fn empty(kind: TokenKind, next_offset: u64) -> Self {
        Self::new(kind, TokenValue::Empty, next_offset)
    }

    /// Token carrying raw bytes.
    pub fn bytes_value(kind: TokenKind, bytes: Vec<u8>, next_offset: u64) -> Self {
        Self::new(kind, TokenValue::Bytes(bytes), next_offset)
    }

    #[must_use]
    pub fn with_status(mut self, status: ScanStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_complete(&self) -> bool {
        self.status == ScanStatus::Complete
    }

    /// Raw bytes of a byte-valued token.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.value {
            TokenValue::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Children of an array or dictionary.
    pub fn children(&self) -> Option<&[Token]> {
        match &self.value {
            TokenValue::Children(children) => Some(children),
            _ => None,
        }
    }

    pub fn object_id(&self) -> Option<ObjectId> {
        match self.value {
            TokenValue::Id(id) => Some(id),
            _ => None,
        }
    }

    /// Textual view of the value: bytes decoded lossily, ids as `"<obj>_<gen>"`.
    ///
    /// `None` for empty and container values.
    pub fn text(&self) -> Option<Cow<'_, str>> {
        match &self.value {
            TokenValue::Bytes(bytes) => Some(String::from_utf8_lossy(bytes)),
            TokenValue::Id(id) => Some(Cow::Owned(id.to_string())),
            TokenValue::Empty | TokenValue::Children(_) => None,
        }
    }
}

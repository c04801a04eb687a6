//! Raw tokenizer for PDF object syntax.
//!
//! Turns a seekable byte source into raw syntactic tokens one at a time,
//! driven by an absolute byte offset. Every scan call reads the source in
//! fixed-size blocks, so documents never need to fit in memory.
//!
//! The tokenizer is deliberately shallow: it does not resolve indirect
//! references, decode escapes, or apply stream filters. Those belong to the
//! document layer that consumes [`Token`] values.
//!
//! # Usage
//!
//! ```
//! use std::io::Cursor;
//! use pdf_lexer_core::{scan_token, TokenKind};
//!
//! let mut source = Cursor::new(&b"12 0 R /Type"[..]);
//! let reference = scan_token(&mut source, 0)?;
//! assert_eq!(reference.kind, TokenKind::IndirectRef);
//! assert_eq!(reference.text().as_deref(), Some("12_0"));
//!
//! let name = scan_token(&mut source, reference.next_offset)?;
//! assert_eq!(name.kind, TokenKind::Name);
//! assert_eq!(name.bytes(), Some(&b"Type"[..]));
//! # Ok::<(), pdf_lexer_core::ScanError>(())
//! ```
//!
//! # Malformed input
//!
//! Truncated or malformed input never produces an error. The scanner always
//! returns a token and reports degradation through [`Token::status`]. Only a
//! failing [`ByteSource`] surfaces as [`ScanError`].

mod byte_class;
mod config;
mod error;
mod reader;
mod scanner;
mod source;
mod stack;
mod token;

pub use config::ScanConfig;
pub use error::{ConfigError, ScanError, ScanResult};
pub use reader::ChunkedReader;
pub use scanner::{scan_token, scan_token_with, Scanner, Tokens};
pub use source::ByteSource;
pub use token::{ObjectId, ScanStatus, Token, TokenKind, TokenValue};

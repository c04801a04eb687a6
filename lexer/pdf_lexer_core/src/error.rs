//! Hard failures of a scan.
//!
//! Malformed input is not an error: it is reported in-band through
//! [`ScanStatus`](crate::ScanStatus). The variants here cover the byte source
//! itself becoming unusable and configurations the scanner cannot honour.

use std::io;

/// A scan that could not run to completion.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Repositioning the byte source failed.
    #[error("failed to seek byte source to offset {offset}")]
    Seek {
        offset: u64,
        #[source]
        source: io::Error,
    },
    /// Reading from the byte source failed.
    #[error("failed to read byte source at offset {offset}")]
    Read {
        offset: u64,
        #[source]
        source: io::Error,
    },
    #[error("invalid scan configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Rejected [`ScanConfig`](crate::ScanConfig) value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("block size must be non-zero")]
    ZeroBlockSize,
    #[error("name window must be non-zero")]
    ZeroNameWindow,
    #[error("keyword window of {0} bytes cannot hold `endstream` (9 bytes)")]
    KeywordWindowTooSmall(usize),
    #[error("reference window of {0} bytes cannot hold `0 0 R` (5 bytes)")]
    ReferenceWindowTooSmall(usize),
}

pub type ScanResult<T> = Result<T, ScanError>;

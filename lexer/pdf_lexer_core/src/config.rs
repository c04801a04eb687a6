//! Lookahead and block-size configuration.

use crate::error::ConfigError;

/// Length of the longest keyword (`endstream`).
const LONGEST_KEYWORD: usize = 9;

/// Length of the shortest indirect reference (`0 0 R`).
const SHORTEST_REFERENCE: usize = 5;

/// Sizes of the windows each scanner reads ahead.
///
/// The defaults match the fixed windows PDF tokenizers traditionally use.
/// Only `block_size` bounds how much is read per I/O call; the other windows
/// bound how far a single pattern match may look.
///
/// `reference_window` is intentionally not extended by the scanner: an
/// `<obj> <gen> R` whose `R` falls outside it is scanned as a plain number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    /// Unit of incremental lookahead for every chunked scan.
    pub block_size: usize,
    /// Maximum name length; longer names are truncated.
    pub name_window: usize,
    /// Window for keyword prefix matching.
    pub keyword_window: usize,
    /// Window for the `<obj> <gen> R` / `<obj> <gen> obj` patterns.
    pub reference_window: usize,
}

impl ScanConfig {
    pub const DEFAULT: ScanConfig = ScanConfig {
        block_size: 1024,
        name_window: 256,
        keyword_window: LONGEST_KEYWORD,
        reference_window: 33,
    };

    #[must_use]
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    #[must_use]
    pub fn with_name_window(mut self, name_window: usize) -> Self {
        self.name_window = name_window;
        self
    }

    #[must_use]
    pub fn with_keyword_window(mut self, keyword_window: usize) -> Self {
        self.keyword_window = keyword_window;
        self
    }

    #[must_use]
    pub fn with_reference_window(mut self, reference_window: usize) -> Self {
        self.reference_window = reference_window;
        self
    }

    /// Check that every window can hold what it is meant to match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        if self.name_window == 0 {
            return Err(ConfigError::ZeroNameWindow);
        }
        if self.keyword_window < LONGEST_KEYWORD {
            return Err(ConfigError::KeywordWindowTooSmall(self.keyword_window));
        }
        if self.reference_window < SHORTEST_REFERENCE {
            return Err(ConfigError::ReferenceWindowTooSmall(
                self.reference_window,
            ));
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

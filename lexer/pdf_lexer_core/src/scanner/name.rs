//! Names: `/` followed by regular bytes.

use tracing::debug;

use super::Scanner;
use crate::byte_class::{is_name_byte, run_len};
use crate::error::ScanResult;
use crate::reader::widen;
use crate::source::ByteSource;
use crate::token::{ScanStatus, Token, TokenKind};

impl<S: ByteSource + ?Sized> Scanner<'_, S> {
    /// Scan the name whose solidus is at `at`.
    ///
    /// The body is matched within a fixed window and never extended: a longer
    /// name is cut at the window and marked `Truncated`. `#xx` escapes are
    /// kept verbatim.
    pub(super) fn name(&mut self, at: u64) -> ScanResult<Token> {
        let start = at + 1;
        let window = self.config.name_window;
        // One byte past the window tells a cut name from one that fits exactly.
        let block = self.reader.read_block(start, window.saturating_add(1))?;
        let visible = &block[..block.len().min(window)];
        let len = run_len(visible, is_name_byte);
        let token = Token::bytes_value(TokenKind::Name, visible[..len].to_vec(), start + widen(len));
        if len == window && block.get(window).is_some_and(|&b| is_name_byte(b)) {
            debug!(offset = at, window, "name longer than its window");
            return Ok(token.with_status(ScanStatus::Truncated));
        }
        Ok(token)
    }
}

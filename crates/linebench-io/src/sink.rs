// SPDX-License-Identifier: MIT OR Apache-2.0
//! Receiver of decoded lines

use linebench_core::Result;

/// Accepts one decoded text line at a time
///
/// Lines arrive without their terminator. An error returned here aborts the
/// read and is propagated to the caller unchanged.
pub trait LineSink {
    /// Handle one line
    ///
    /// # Errors
    ///
    /// Any application failure; the read stops at the first one.
    fn accept(&mut self, line: &str) -> Result<()>;
}

impl<F> LineSink for F
where
    F: FnMut(&str) -> Result<()>,
{
    fn accept(&mut self, line: &str) -> Result<()> {
        self(line)
    }
}

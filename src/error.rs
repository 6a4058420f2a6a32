//! Input validation errors.
//!
//! Filters validate image shape before touching any pixel; a shape error
//! means no output buffer is ever produced. Per-pixel arithmetic itself is
//! total and never fails.

use thiserror::Error;

/// Errors raised by filter entry points during input validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Image has zero height or width.
    #[error("empty image: {height}x{width}")]
    EmptyImage { height: usize, width: usize },

    /// Channel count is not one of the supported layouts (1, 3 or 4).
    #[error("unsupported channel count: {channels} (expected 1, 3 or 4)")]
    UnsupportedChannels { channels: usize },
}

//! Error type for the library surface.
//!
//! The codec and URL operations themselves never fail; errors only arise at
//! the edges, where untyped input (raw bytes, JSON records) enters the crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UrlKitError {
    /// Primary input was not usable text.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A serialized URL record could not be read or written.
    #[error("invalid URL record: {0}")]
    Record(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UrlKitError>;

/// Borrows `bytes` as text for the codec and parser.
///
/// Non-UTF-8 input is rejected with [`UrlKitError::InvalidArgument`] rather
/// than decoded lossily, so callers never encode replacement characters they
/// did not supply.
pub fn input_from_bytes(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        UrlKitError::InvalidArgument(format!(
            "input is not valid UTF-8 (first bad byte at offset {})",
            e.valid_up_to()
        ))
    })
}

//! Error types for key construction.

use thiserror::Error;

/// Returned when a byte slice cannot be used as an AES-128 key.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("AES-128 key must be 16 bytes, got {len}")]
pub struct InvalidKeyLength {
    /// Length of the rejected input.
    pub len: usize,
}

//! Error types for GCM encryption.
//!
//! Every variant reports caller misuse; none is transient, and no partial
//! output accompanies an error.

use core::fmt;

use aes_core::InvalidKeyLength;
use thiserror::Error;

/// Which input a length error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// The message being encrypted.
    Plaintext,
    /// Associated authenticated data.
    Aad,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Plaintext => f.write_str("plaintext"),
            Field::Aad => f.write_str("AAD"),
        }
    }
}

/// Errors returned by GCM encryption.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GcmError {
    /// The key was not 16 bytes.
    #[error("key must be 16 bytes, got {len}")]
    InvalidKeyLength {
        /// Length of the rejected key.
        len: usize,
    },

    /// The IV was not 12 bytes.
    #[error("IV must be 12 bytes, got {len}")]
    InvalidIvLength {
        /// Length of the rejected IV.
        len: usize,
    },

    /// Plaintext or AAD is not a whole number of blocks.
    #[error("{field} length {len} is not a multiple of 16 bytes")]
    UnalignedLength {
        /// The offending input.
        field: Field,
        /// Its length in bytes.
        len: usize,
    },

    /// The plaintext would wrap the 32-bit block counter.
    #[error("plaintext of {blocks} blocks exceeds the GCM limit of 2^32 - 2 blocks")]
    MessageTooLong {
        /// Number of plaintext blocks supplied.
        blocks: u64,
    },
}

impl From<InvalidKeyLength> for GcmError {
    fn from(err: InvalidKeyLength) -> Self {
        GcmError::InvalidKeyLength { len: err.len }
    }
}

/// Result alias for GCM operations.
pub type Result<T> = core::result::Result<T, GcmError>;

//! AES-128-GCM authenticated encryption, built on [`aes_core`].
//!
//! The crate exposes each layer of the construction:
//! - [`gmul`]: multiplication in GF(2^128).
//! - [`ghash`]: the GHASH universal hash and its length block.
//! - [`gctr`]: counter-mode keystream with 32-bit counter increments.
//! - [`Gcm`] / [`gcm_encrypt`]: the full mode, producing ciphertext and tag.
//!
//! Only whole-block plaintext and AAD are accepted, and only encryption is
//! provided. Like `aes_core`, nothing here is hardened against side channels,
//! with the exception of [`Tag`] equality which runs in constant time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod ctr;
mod error;
mod gcm;
mod gf128;
mod ghash;
mod tag;

pub use crate::config::{GcmConfig, DEFAULT_PARALLEL_THRESHOLD};
pub use crate::ctr::{counter_block, gctr, gctr_with_config, inc32};
pub use crate::error::{Field, GcmError, Result};
pub use crate::gcm::{
    gcm_encrypt, initial_counter_block, Aes128Gcm, Gcm, Iv, Sealed, IV_LEN, MAX_PLAINTEXT_BLOCKS,
};
pub use crate::gf128::{gmul, ONE, R};
pub use crate::ghash::{ghash, length_block, Ghash};
pub use crate::tag::{Tag, TAG_LEN};

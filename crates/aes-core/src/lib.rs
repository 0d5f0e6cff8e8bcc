//! AES-128 block encryption, written directly against FIPS-197.
//!
//! This crate provides:
//! - GF(2^8) doubling and the AES S-box.
//! - The 4×4 state matrix and the four round transformations.
//! - The AES-128 key schedule, both on-the-fly ([`KeySchedule`]) and
//!   precomputed ([`expand_key`]).
//! - Single-block encryption, plus the [`BlockEncrypt`] trait other modes
//!   build on.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf256;
mod key;
mod round;
mod sbox;
mod state;

pub use crate::block::{xor, xor_in_place, Block, BLOCK_LEN};
pub use crate::cipher::{encrypt, encrypt_block, Aes128, BlockEncrypt};
pub use crate::error::InvalidKeyLength;
pub use crate::gf256::xtime;
pub use crate::key::{expand_key, Aes128Key, KeySchedule, RoundKeys, ROUNDS};
pub use crate::sbox::sbox;
pub use crate::state::State;

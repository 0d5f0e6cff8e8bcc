//! AES-128 single-block encryption.

use core::fmt;

use crate::block::Block;
use crate::key::{expand_key, Aes128Key, KeySchedule, RoundKeys, ROUNDS};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::state::State;

/// A keyed 128-bit block cipher, encryption direction only.
pub trait BlockEncrypt {
    /// Encrypts one block.
    fn encrypt_block(&self, block: &Block) -> Block;
}

impl<C: BlockEncrypt + ?Sized> BlockEncrypt for &C {
    #[inline]
    fn encrypt_block(&self, block: &Block) -> Block {
        (**self).encrypt_block(block)
    }
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);
    let key = |round: usize| State::from_block(round_keys.get(round));

    add_round_key(&mut state, &key(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &key(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &key(ROUNDS));

    state.to_block()
}

/// Encrypts a single block, deriving each round key just before it is used.
pub fn encrypt(block: &Block, key: &Aes128Key) -> Block {
    let mut state = State::from_block(block);

    for (round, round_key) in KeySchedule::new(key).enumerate() {
        if round > 0 {
            sub_bytes(&mut state);
            shift_rows(&mut state);
            // the final round skips MixColumns
            if round < ROUNDS {
                mix_columns(&mut state);
            }
        }
        add_round_key(&mut state, &round_key);
    }

    state.to_block()
}

/// AES-128 with its key schedule expanded once up front.
#[derive(Clone, Copy)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Expands `key` and returns a ready cipher.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Returns the expanded round keys.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }
}

impl BlockEncrypt for Aes128 {
    #[inline]
    fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }
}

impl fmt::Debug for Aes128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes128").finish_non_exhaustive()
    }
}

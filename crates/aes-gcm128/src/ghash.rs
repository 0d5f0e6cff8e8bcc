//! GHASH, the polynomial hash that authenticates GCM messages.

use aes_core::{xor_in_place, Block};

use crate::gf128::gmul;

/// Running GHASH accumulator `Y_i = (Y_{i-1} ^ X_i) · H`.
#[derive(Clone)]
pub struct Ghash {
    h: Block,
    y: Block,
}

impl Ghash {
    /// Starts a fresh accumulator at zero under hash subkey `h`.
    pub fn new(h: &Block) -> Self {
        Self { h: *h, y: [0u8; 16] }
    }

    /// Folds one block into the accumulator.
    #[inline]
    pub fn update(&mut self, block: &Block) {
        xor_in_place(&mut self.y, block);
        self.y = gmul(&self.y, &self.h);
    }

    /// Folds a sequence of blocks, in order.
    pub fn update_blocks(&mut self, blocks: &[Block]) {
        for block in blocks {
            self.update(block);
        }
    }

    /// Returns the digest.
    pub fn finalize(self) -> Block {
        self.y
    }
}

/// Hashes `blocks` under `h`.
pub fn ghash(h: &Block, blocks: &[Block]) -> Block {
    let mut acc = Ghash::new(h);
    acc.update_blocks(blocks);
    acc.finalize()
}

/// Builds the final GHASH block from block counts: `len(A) || len(C)`, each a
/// 64-bit big-endian bit length (`blocks × 128`).
pub fn length_block(aad_blocks: u64, ciphertext_blocks: u64) -> Block {
    let mut block = [0u8; 16];
    block[..8].copy_from_slice(&(aad_blocks * 128).to_be_bytes());
    block[8..].copy_from_slice(&(ciphertext_blocks * 128).to_be_bytes());
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const H: Block = hex!("25629347589242761d31f826ba4b757b");
    const X1: Block = hex!("4f4f95668c83dfb6401762bb2d01a262");
    const X2: Block = hex!("d1a24ddd2721d006bbe45f20d3c9f362");

    #[test]
    fn two_block_vector() {
        assert_eq!(ghash(&H, &[X1, X2]), hex!("bd9b3997046731fb96251b91f9c99d7a"));
    }

    #[test]
    fn empty_input_hashes_to_zero() {
        assert_eq!(ghash(&H, &[]), [0u8; 16]);
    }

    #[test]
    fn incremental_matches_one_shot() {
        let mut acc = Ghash::new(&H);
        acc.update(&X1);
        acc.update(&X2);
        assert_eq!(acc.finalize(), ghash(&H, &[X1, X2]));
    }

    #[test]
    fn order_matters() {
        assert_ne!(ghash(&H, &[X1, X2]), ghash(&H, &[X2, X1]));
    }

    #[test]
    fn length_block_counts_bits() {
        assert_eq!(length_block(0, 0), [0u8; 16]);
        assert_eq!(
            length_block(1, 4),
            hex!("0000000000000080 0000000000000200")
        );
        assert_eq!(
            length_block(2, 0x0100_0000),
            hex!("0000000000000100 0000000080000000")
        );
    }
}

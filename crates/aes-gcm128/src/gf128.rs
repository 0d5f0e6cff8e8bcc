//! Multiplication in GF(2^128) as used by GHASH.
//!
//! Blocks are read with the bit ordering of NIST SP 800-38D: the most
//! significant bit of byte 0 is the coefficient of `x^0`. In that ordering
//! the field polynomial `x^128 + x^7 + x^2 + x + 1` reduces to `0xE1` in the
//! first byte.

use aes_core::{xor_in_place, Block};

/// First byte of the reduction constant `R = 11100001 || 0^120`.
pub const R: u8 = 0xe1;

/// The multiplicative identity (`x^0`).
pub const ONE: Block = [0x80, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

/// Shifts the whole block right by one bit and returns the bit that fell off.
#[inline]
fn shift_right(v: &mut Block) -> bool {
    let mut carry = 0u8;
    for byte in v.iter_mut() {
        let out = *byte & 1;
        *byte = (*byte >> 1) | (carry << 7);
        carry = out;
    }
    carry != 0
}

/// Returns `x · y`, bit-serially over the 128 bits of `y`.
pub fn gmul(x: &Block, y: &Block) -> Block {
    let mut z = [0u8; 16];
    let mut v = *x;

    for i in 0..128 {
        if y[i / 8] & (0x80 >> (i % 8)) != 0 {
            xor_in_place(&mut z, &v);
        }
        if shift_right(&mut v) {
            v[0] ^= R;
        }
    }

    z
}

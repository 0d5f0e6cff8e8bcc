//! AES round transformations.

use crate::gf256::{mul3, xtime};
use crate::sbox::sbox;
use crate::state::State;

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut() {
        *byte = sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r`.
#[inline]
pub fn shift_rows(state: &mut State) {
    for row in 1..4 {
        state.row_mut(row).rotate_left(row);
    }
}

fn mix_single_column(col: [u8; 4]) -> [u8; 4] {
    let [a0, a1, a2, a3] = col;
    [
        xtime(a0) ^ mul3(a1) ^ a2 ^ a3,
        a0 ^ xtime(a1) ^ mul3(a2) ^ a3,
        a0 ^ a1 ^ xtime(a2) ^ mul3(a3),
        mul3(a0) ^ a1 ^ a2 ^ xtime(a3),
    ]
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let mixed = mix_single_column(state.column(col));
        state.set_column(col, mixed);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &State) {
    state.xor_assign(round_key);
}

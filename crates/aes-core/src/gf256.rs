//! Arithmetic in GF(2^8) modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1`.

/// Low byte of the AES reduction polynomial.
const REDUCTION: u8 = 0x1b;

/// Multiplies by `x` (i.e. by 2).
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies by `x + 1` (i.e. by 3).
#[inline]
pub const fn mul3(byte: u8) -> u8 {
    xtime(byte) ^ byte
}

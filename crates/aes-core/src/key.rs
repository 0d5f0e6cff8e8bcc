//! Key types and the AES-128 key schedule.

use crate::block::Block;
use crate::error::InvalidKeyLength;
use crate::sbox::sbox;
use crate::state::State;

/// Number of rounds for AES-128.
pub const ROUNDS: usize = 10;

const RCON: [u8; ROUNDS] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = InvalidKeyLength;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 16] = value
            .try_into()
            .map_err(|_| InvalidKeyLength { len: value.len() })?;
        Ok(Self(bytes))
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; ROUNDS + 1]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}

/// Derives round keys one at a time, in order, from a single key matrix.
///
/// Yields exactly `ROUNDS + 1` keys. The matrix is advanced in place right
/// after each key is handed out, so it always holds the next round's key.
#[derive(Clone, Debug)]
pub struct KeySchedule {
    key: State,
    round: usize,
}

impl KeySchedule {
    /// Starts the schedule at round 0.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            key: State::from_block(&key.0),
            round: 0,
        }
    }

    /// Advances the key matrix from round `round` to `round + 1`.
    fn advance(&mut self) {
        let mut temp = self.key.column(3);
        temp.rotate_left(1);
        for byte in temp.iter_mut() {
            *byte = sbox(*byte);
        }
        temp[0] ^= RCON[self.round];

        let mut prev = temp;
        for col in 0..4 {
            let mut column = self.key.column(col);
            for (byte, p) in column.iter_mut().zip(prev) {
                *byte ^= p;
            }
            self.key.set_column(col, column);
            prev = column;
        }
    }
}

impl Iterator for KeySchedule {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        if self.round > ROUNDS {
            return None;
        }
        let current = self.key;
        if self.round < ROUNDS {
            self.advance();
        }
        self.round += 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (ROUNDS + 1).saturating_sub(self.round);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for KeySchedule {}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    for (slot, round_key) in round_keys.iter_mut().zip(KeySchedule::new(key)) {
        *slot = round_key.to_block();
    }
    RoundKeys(round_keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const APPENDIX_A_KEY: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");

    #[test]
    fn expansion_matches_fips197_appendix_a() {
        let rks = expand_key(&Aes128Key::from(APPENDIX_A_KEY));
        assert_eq!(*rks.get(0), APPENDIX_A_KEY);
        assert_eq!(*rks.get(1), hex!("a0fafe1788542cb123a339392a6c7605"));
        assert_eq!(*rks.get(2), hex!("f2c295f27a96b9435935807a7359f67f"));
        assert_eq!(*rks.get(9), hex!("ac7766f319fadc2128d12941575c006e"));
        assert_eq!(*rks.get(10), hex!("d014f9a8c9ee2589e13f0cc8b6630ca6"));
    }

    #[test]
    fn schedule_yields_eleven_keys_then_stops() {
        let mut schedule = KeySchedule::new(&Aes128Key::from([0u8; 16]));
        assert_eq!(schedule.len(), 11);
        for _ in 0..11 {
            assert!(schedule.next().is_some());
        }
        assert!(schedule.next().is_none());
        assert!(schedule.next().is_none());
    }

    #[test]
    fn zero_key_last_round_key() {
        let rks = expand_key(&Aes128Key::from([0u8; 16]));
        assert_eq!(*rks.get(1), hex!("62636363626363636263636362636363"));
        assert_eq!(*rks.get(10), hex!("b4ef5bcb3e92e21123e951cf6f8f188e"));
    }

    #[test]
    fn key_from_slice_checks_length() {
        let key = Aes128Key::try_from(&APPENDIX_A_KEY[..]).expect("16 bytes");
        assert_eq!(key.0, APPENDIX_A_KEY);
        assert_eq!(
            Aes128Key::try_from(&APPENDIX_A_KEY[..15]),
            Err(InvalidKeyLength { len: 15 })
        );
        assert_eq!(
            Aes128Key::try_from(&[0u8; 32][..]),
            Err(InvalidKeyLength { len: 32 })
        );
    }
}

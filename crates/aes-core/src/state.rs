//! The 4×4 byte matrix the round functions operate on.

use core::fmt;

use crate::block::Block;

/// A block viewed as a 4×4 grid, indexed `(row, col)`.
///
/// Byte `i` of a block lives at row `i % 4`, column `i / 4`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
    rows: [[u8; 4]; 4],
}

impl State {
    /// Loads a block in column-major order.
    pub fn from_block(block: &Block) -> Self {
        let mut rows = [[0u8; 4]; 4];
        for (i, byte) in block.iter().enumerate() {
            rows[i % 4][i / 4] = *byte;
        }
        Self { rows }
    }

    /// Serializes the grid back to a block, inverting [`State::from_block`].
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; 16];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = self.rows[i % 4][i / 4];
        }
        block
    }

    /// Returns the byte at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }

    /// Returns a mutable reference to row `row`.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [u8; 4] {
        &mut self.rows[row]
    }

    /// Copies out column `col`, top to bottom.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; 4] {
        [
            self.rows[0][col],
            self.rows[1][col],
            self.rows[2][col],
            self.rows[3][col],
        ]
    }

    /// Overwrites column `col`.
    #[inline]
    pub fn set_column(&mut self, col: usize, column: [u8; 4]) {
        for (row, byte) in self.rows.iter_mut().zip(column) {
            row[col] = byte;
        }
    }

    /// Iterates over every byte mutably, row by row.
    pub fn bytes_mut(&mut self) -> impl Iterator<Item = &mut u8> {
        self.rows.iter_mut().flatten()
    }

    /// XORs `rhs` into `self` element-wise.
    #[inline]
    pub fn xor_assign(&mut self, rhs: &State) {
        for (row, rhs_row) in self.rows.iter_mut().zip(rhs.rows.iter()) {
            for (byte, rhs_byte) in row.iter_mut().zip(rhs_row) {
                *byte ^= *rhs_byte;
            }
        }
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}

/// Diagnostic dump: one line per row, bytes in hex.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{:02x} {:02x} {:02x} {:02x}", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}

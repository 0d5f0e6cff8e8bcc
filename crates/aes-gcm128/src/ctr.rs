//! GCTR: counter-mode keystream over 32-bit incrementing counter blocks.

use aes_core::{xor, Block, BlockEncrypt};
#[cfg(feature = "parallel")]
use tracing::trace;

use crate::config::GcmConfig;

/// Increments the low 32 bits of `counter` as a big-endian integer, wrapping.
/// The upper 96 bits are left untouched.
#[inline]
pub fn inc32(counter: &mut Block) {
    let low = u32::from_be_bytes([counter[12], counter[13], counter[14], counter[15]]);
    counter[12..].copy_from_slice(&low.wrapping_add(1).to_be_bytes());
}

/// Returns the counter reached from `icb` after `n` calls to [`inc32`].
#[inline]
pub fn counter_block(icb: &Block, n: u32) -> Block {
    let mut counter = *icb;
    let low = u32::from_be_bytes([icb[12], icb[13], icb[14], icb[15]]);
    counter[12..].copy_from_slice(&low.wrapping_add(n).to_be_bytes());
    counter
}

/// Encrypts (or decrypts) `input` in counter mode.
///
/// The counter is incremented before each use, so block `i` is masked with
/// the encryption of `icb + i + 1`.
pub fn gctr<C>(cipher: &C, icb: &Block, input: &[Block]) -> Vec<Block>
where
    C: BlockEncrypt + ?Sized,
{
    let mut counter = *icb;
    input
        .iter()
        .map(|block| {
            inc32(&mut counter);
            xor(&cipher.encrypt_block(&counter), block)
        })
        .collect()
}

/// Like [`gctr`], but hands large inputs to the rayon pool when the
/// configuration allows it.
pub fn gctr_with_config<C>(
    cipher: &C,
    icb: &Block,
    input: &[Block],
    config: &GcmConfig,
) -> Vec<Block>
where
    C: BlockEncrypt + Sync + ?Sized,
{
    #[cfg(feature = "parallel")]
    if config
        .parallel_threshold
        .is_some_and(|threshold| input.len() >= threshold)
    {
        trace!(blocks = input.len(), "gctr on rayon pool");
        return gctr_parallel(cipher, icb, input);
    }
    #[cfg(not(feature = "parallel"))]
    let _ = config;

    gctr(cipher, icb, input)
}

#[cfg(feature = "parallel")]
fn gctr_parallel<C>(cipher: &C, icb: &Block, input: &[Block]) -> Vec<Block>
where
    C: BlockEncrypt + Sync + ?Sized,
{
    use rayon::prelude::*;

    input
        .par_iter()
        .enumerate()
        .map(|(i, block)| {
            // truncation matches the 32-bit wrap of sequential increments
            let counter = counter_block(icb, (i as u32).wrapping_add(1));
            xor(&cipher.encrypt_block(&counter), block)
        })
        .collect()
}

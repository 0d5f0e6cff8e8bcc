//! Galois/Counter Mode encryption (NIST SP 800-38D, 96-bit IVs).

use aes_core::{xor, Aes128, Aes128Key, Block, BlockEncrypt, BLOCK_LEN};
use tracing::debug;

use crate::config::GcmConfig;
use crate::ctr::gctr_with_config;
use crate::error::{Field, GcmError, Result};
use crate::ghash::{length_block, Ghash};
use crate::tag::Tag;

/// IV length in bytes.
pub const IV_LEN: usize = 12;

/// Most plaintext blocks one call may encrypt. One more would wrap the
/// 32-bit counter back onto `J0`.
pub const MAX_PLAINTEXT_BLOCKS: u64 = (1 << 32) - 2;

/// A 96-bit nonce.
pub type Iv = [u8; IV_LEN];

/// Output of an authenticated encryption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sealed {
    /// Ciphertext, the same length as the plaintext.
    pub ciphertext: Vec<u8>,
    /// Authentication tag over AAD and ciphertext.
    pub tag: Tag,
}

/// GCM over any 128-bit block cipher.
pub struct Gcm<C> {
    cipher: C,
    h: Block,
    config: GcmConfig,
}

/// GCM over AES-128.
pub type Aes128Gcm = Gcm<Aes128>;

impl Aes128Gcm {
    /// Expands `key` and derives the hash subkey.
    pub fn from_key(key: &Aes128Key) -> Self {
        Self::new(Aes128::new(key))
    }
}

impl<C: BlockEncrypt + Sync> Gcm<C> {
    /// Wraps `cipher` with the default configuration.
    pub fn new(cipher: C) -> Self {
        Self::with_config(cipher, GcmConfig::default())
    }

    /// Wraps `cipher` with an explicit configuration.
    pub fn with_config(cipher: C, config: GcmConfig) -> Self {
        let h = cipher.encrypt_block(&[0u8; 16]);
        Self { cipher, h, config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GcmConfig {
        &self.config
    }

    /// Encrypts `plaintext` and authenticates it together with `aad`.
    ///
    /// Both inputs must be whole blocks.
    pub fn encrypt(&self, iv: &Iv, plaintext: &[u8], aad: &[u8]) -> Result<Sealed> {
        let pt_blocks = to_blocks(plaintext, Field::Plaintext)?;
        let aad_blocks = to_blocks(aad, Field::Aad)?;
        check_plaintext_blocks(pt_blocks.len())?;

        debug!(
            plaintext_blocks = pt_blocks.len(),
            aad_blocks = aad_blocks.len(),
            "gcm encrypt"
        );

        let j0 = initial_counter_block(iv);
        // gctr starts from J0 + 1; J0 itself only masks the tag
        let ct_blocks = gctr_with_config(&self.cipher, &j0, &pt_blocks, &self.config);

        let mut ghash = Ghash::new(&self.h);
        ghash.update_blocks(&aad_blocks);
        ghash.update_blocks(&ct_blocks);
        ghash.update(&length_block(
            aad_blocks.len() as u64,
            ct_blocks.len() as u64,
        ));
        let s = ghash.finalize();

        let tag = Tag::from(xor(&self.cipher.encrypt_block(&j0), &s));

        Ok(Sealed {
            ciphertext: ct_blocks.concat(),
            tag,
        })
    }
}

/// Builds `J0 = IV || 0x00000001`.
pub fn initial_counter_block(iv: &Iv) -> Block {
    let mut j0 = [0u8; 16];
    j0[..IV_LEN].copy_from_slice(iv);
    j0[15] = 0x01;
    j0
}

/// One-shot AES-128-GCM over raw byte slices.
///
/// Lengths are validated in order: key, IV, plaintext, AAD.
pub fn gcm_encrypt(key: &[u8], iv: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Sealed> {
    let key = Aes128Key::try_from(key).map_err(|err| {
        debug!(len = err.len, "rejecting key");
        GcmError::from(err)
    })?;
    let iv: Iv = iv.try_into().map_err(|_| {
        debug!(len = iv.len(), "rejecting IV");
        GcmError::InvalidIvLength { len: iv.len() }
    })?;
    Aes128Gcm::from_key(&key).encrypt(&iv, plaintext, aad)
}

fn to_blocks(bytes: &[u8], field: Field) -> Result<Vec<Block>> {
    if bytes.len() % BLOCK_LEN != 0 {
        debug!(%field, len = bytes.len(), "rejecting unaligned input");
        return Err(GcmError::UnalignedLength {
            field,
            len: bytes.len(),
        });
    }
    Ok(bytes
        .chunks_exact(BLOCK_LEN)
        .map(|chunk| {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            block
        })
        .collect())
}

fn check_plaintext_blocks(blocks: usize) -> Result<()> {
    let blocks = blocks as u64;
    if blocks > MAX_PLAINTEXT_BLOCKS {
        debug!(blocks, "rejecting oversized plaintext");
        return Err(GcmError::MessageTooLong { blocks });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn j0_appends_big_endian_one() {
        let j0 = initial_counter_block(&hex!("cafebabefacedbaddecaf888"));
        assert_eq!(j0, hex!("cafebabefacedbaddecaf888 00000001"));
    }

    #[test]
    fn hash_subkey_is_encrypted_zero_block() {
        let gcm = Aes128Gcm::from_key(&Aes128Key::from([0u8; 16]));
        assert_eq!(gcm.h, hex!("66e94bd4ef8a2c3b884cfa59ca342b2e"));
        assert_eq!(gcm.config(), &GcmConfig::default());
    }

    #[test]
    fn blocks_split_in_order() {
        let bytes: Vec<u8> = (0..32).collect();
        let blocks = to_blocks(&bytes, Field::Plaintext).expect("aligned");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1][0], 16);
        assert!(to_blocks(&[], Field::Aad).expect("empty").is_empty());
        assert_eq!(
            to_blocks(&bytes[..17], Field::Aad),
            Err(GcmError::UnalignedLength {
                field: Field::Aad,
                len: 17
            })
        );
    }

    #[test]
    fn plaintext_limit_is_enforced() {
        let max = MAX_PLAINTEXT_BLOCKS as usize;
        assert!(check_plaintext_blocks(max).is_ok());
        assert_eq!(
            check_plaintext_blocks(max + 1),
            Err(GcmError::MessageTooLong {
                blocks: MAX_PLAINTEXT_BLOCKS + 1
            })
        );
    }
}

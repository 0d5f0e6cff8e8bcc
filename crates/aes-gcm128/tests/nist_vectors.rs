//! Known-answer tests from NIST SP 800-38D / the GCM submission, plus
//! whole-block AAD cases cross-checked against an independent implementation.

use aes_gcm128::{gcm_encrypt, Tag};
use hex_literal::hex;

const K3: [u8; 16] = hex!("feffe9928665731c6d6a8f9467308308");
const IV3: [u8; 12] = hex!("cafebabefacedbaddecaf888");
const P3: [u8; 64] = hex!(
    "d9313225f88406e5a55909c5aff5269a"
    "86a7a9531534f7da2e4c303d8a318a72"
    "1c3c0c95956809532fcf0e2449a6b525"
    "b16aedf5aa0de657ba637b391aafd255"
);
const C3: [u8; 64] = hex!(
    "42831ec2217774244b7221b784d0d49c"
    "e3aa212f2c02a4e035c17e2329aca12e"
    "21d514b25466931c7d8f6a5aac84aa05"
    "1ba30b396a0aac973d58e091473f5985"
);
const AAD2: [u8; 32] = hex!(
    "feedfacedeadbeeffeedfacedeadbeef"
    "abaddad2000000000000000000000000"
);

#[test]
fn test_case_1_empty_everything() {
    let sealed = gcm_encrypt(&[0u8; 16], &[0u8; 12], &[], &[]).expect("valid inputs");
    assert!(sealed.ciphertext.is_empty());
    assert_eq!(sealed.tag, Tag::from(hex!("58e2fccefa7e3061367f1d57a4e7455a")));
}

#[test]
fn test_case_2_one_zero_block() {
    let sealed = gcm_encrypt(&[0u8; 16], &[0u8; 12], &[0u8; 16], &[]).expect("valid inputs");
    assert_eq!(sealed.ciphertext, hex!("0388dace60b6a392f328c2b971b2fe78"));
    assert_eq!(sealed.tag, Tag::from(hex!("ab6e47d42cec13bdf53a67b21257bddf")));
}

#[test]
fn test_case_3_four_blocks() {
    let sealed = gcm_encrypt(&K3, &IV3, &P3, &[]).expect("valid inputs");
    assert_eq!(sealed.ciphertext, C3);
    assert_eq!(sealed.tag, Tag::from(hex!("4d5c2af327cd64a62cf35abd2ba6fab4")));
}

#[test]
fn four_blocks_with_two_aad_blocks() {
    let sealed = gcm_encrypt(&K3, &IV3, &P3, &AAD2).expect("valid inputs");
    // AAD never changes the ciphertext, only the tag.
    assert_eq!(sealed.ciphertext, C3);
    assert_eq!(sealed.tag, Tag::from(hex!("a97d464b73eb8fe7e1838c7a9a6e7c2b")));
}

#[test]
fn aad_only() {
    let sealed = gcm_encrypt(&K3, &IV3, &[], &AAD2).expect("valid inputs");
    assert!(sealed.ciphertext.is_empty());
    assert_eq!(sealed.tag, Tag::from(hex!("4799bc352ec3e2c61ba678b80dbaa027")));
}

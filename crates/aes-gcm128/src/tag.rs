//! The 128-bit authentication tag.

use core::fmt;

use subtle::{Choice, ConstantTimeEq};

/// Size of a GCM tag in bytes.
pub const TAG_LEN: usize = 16;

/// A GCM authentication tag.
///
/// Equality is evaluated in constant time.
#[derive(Clone, Copy)]
pub struct Tag([u8; TAG_LEN]);

impl Tag {
    /// Returns the raw tag bytes.
    pub fn as_bytes(&self) -> &[u8; TAG_LEN] {
        &self.0
    }
}

impl From<[u8; TAG_LEN]> for Tag {
    fn from(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Tag> for [u8; TAG_LEN] {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ConstantTimeEq for Tag {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Tag {}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn equality_compares_every_byte() {
        let a = Tag::from(hex!("58e2fccefa7e3061367f1d57a4e7455a"));
        let mut flipped = *a.as_bytes();
        flipped[15] ^= 1;
        assert_eq!(a, Tag::from(*a.as_bytes()));
        assert_ne!(a, Tag::from(flipped));
        assert!(!bool::from(a.ct_eq(&Tag::from(flipped))));
    }

    #[test]
    fn renders_as_hex() {
        let tag = Tag::from(hex!("58e2fccefa7e3061367f1d57a4e7455a"));
        assert_eq!(tag.to_string(), "58e2fccefa7e3061367f1d57a4e7455a");
        assert_eq!(format!("{tag:?}"), "Tag(58e2fccefa7e3061367f1d57a4e7455a)");
        let bytes: [u8; TAG_LEN] = tag.into();
        assert_eq!(bytes[0], 0x58);
    }
}

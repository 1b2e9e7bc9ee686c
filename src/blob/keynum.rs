//! Signify key number.

use std::fmt;

use crate::error::FormatError;

const KEYNUM_LEN: usize = 8;

/// 8-byte identifier tying a signature to the keypair that made it.
///
/// Key numbers are public, so equality is a plain byte comparison.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyNumber([u8; KEYNUM_LEN]);

impl KeyNumber {
    /// Length of a key number in bytes.
    pub const LEN: usize = KEYNUM_LEN;

    pub fn as_bytes(&self) -> &[u8; KEYNUM_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for KeyNumber {
    type Error = FormatError;

    fn try_from(raw: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; KEYNUM_LEN] = raw.try_into().map_err(|_| FormatError::KeyNumberLength {
            expected: Self::LEN,
            actual: raw.len(),
        })?;
        Ok(KeyNumber(bytes))
    }
}

impl From<[u8; KEYNUM_LEN]> for KeyNumber {
    fn from(bytes: [u8; KEYNUM_LEN]) -> Self {
        KeyNumber(bytes)
    }
}

impl fmt::Display for KeyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for KeyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyNumber({self})")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    const RAW: [u8; 8] = [0x11, 0x22, 0x22, 0x44, 0x0a, 0x0b, 0x0c, 0x0d];

    fn hash_of(k: &KeyNumber) -> u64 {
        let mut h = DefaultHasher::new();
        k.hash(&mut h);
        h.finish()
    }

    #[test]
    fn too_short() {
        let err = KeyNumber::try_from(&RAW[..4]).unwrap_err();
        assert!(matches!(err, FormatError::KeyNumberLength { expected: 8, actual: 4 }));
        assert_eq!(err.to_string(), "key number length must be 8, but was 4");
    }

    #[test]
    fn too_long() {
        let long = [0x11, 0x22, 0x22, 0x44, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e];
        let err = KeyNumber::try_from(&long[..]).unwrap_err();
        assert!(matches!(err, FormatError::KeyNumberLength { expected: 8, actual: 9 }));
    }

    #[test]
    fn every_wrong_length_is_rejected() {
        let buf = [0u8; 32];
        for len in (0..buf.len()).filter(|&l| l != KeyNumber::LEN) {
            let err = KeyNumber::try_from(&buf[..len]).unwrap_err();
            assert!(matches!(err, FormatError::KeyNumberLength { expected: 8, actual } if actual == len));
        }
    }

    #[test]
    fn keeps_raw_bytes() {
        let k = KeyNumber::try_from(&RAW[..]).unwrap();
        assert_eq!(k.as_bytes(), &RAW);
    }

    #[test]
    fn equality_is_bytewise() {
        let k1 = KeyNumber::from(RAW);
        let k2 = KeyNumber::try_from(&RAW[..]).unwrap();
        let other = KeyNumber::from([0x07, 0x14, 0x21, 0x42, 0x0a, 0x0b, 0x0c, 0x0d]);

        assert_eq!(k1, k2);
        assert_eq!(k2, k1);
        assert_ne!(k1, other);
        assert_ne!(other, k1);
        assert_eq!(hash_of(&k1), hash_of(&k2));
    }

    #[test]
    fn displays_as_hex() {
        let k = KeyNumber::from(RAW);
        assert_eq!(k.to_string(), "112222440a0b0c0d");
        assert_eq!(format!("{k:?}"), "KeyNumber(112222440a0b0c0d)");
    }
}

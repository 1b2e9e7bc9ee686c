//! Signify algorithm tag.

use crate::error::FormatError;

/// Signature algorithm named by the first two bytes of every key and signature blob.
///
/// Only `Ed` (Ed25519) exists. Any other tag is rejected while parsing and
/// reported with its raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Ed25519,
}

impl Algorithm {
    /// Length of the tag in bytes.
    pub const LEN: usize = 2;

    const ED25519_TAG: &'static [u8; 2] = b"Ed";

    pub fn as_bytes(&self) -> &'static [u8; 2] {
        match self {
            Algorithm::Ed25519 => Self::ED25519_TAG,
        }
    }
}

impl TryFrom<&[u8]> for Algorithm {
    type Error = FormatError;

    fn try_from(tag: &[u8]) -> Result<Self, Self::Error> {
        if tag == Self::ED25519_TAG {
            Ok(Algorithm::Ed25519)
        } else {
            Err(FormatError::UnsupportedAlgorithm(tag.to_vec()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ed() {
        let alg = Algorithm::try_from(&b"Ed"[..]).unwrap();
        assert_eq!(alg, Algorithm::Ed25519);
        assert_eq!(alg.as_bytes(), b"Ed");
    }

    #[test]
    fn rejects_other_tags() {
        for tag in [&b"ed"[..], b"EE", b"E", b"Edd", b"", b"\x00\x00"] {
            let err = Algorithm::try_from(tag).unwrap_err();
            assert!(matches!(err, FormatError::UnsupportedAlgorithm(ref raw) if raw == tag));
        }
    }
}

//! Signify signature.

use std::path::Path;

use ed25519_dalek::SIGNATURE_LENGTH;

use crate::armor;
use crate::blob::{self, Algorithm, KeyNumber};
use crate::error::{Error, FormatError};

/// Decoded length of a signature blob.
pub const SIGNATURE_BLOB_LEN: usize = blob::blob_len(SIGNATURE_LENGTH);

/// A signify signature: algorithm, key number of the signing key and the raw
/// Ed25519 signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    algorithm: Algorithm,
    key_number: KeyNumber,
    signature: [u8; SIGNATURE_LENGTH],
}

impl Signature {
    /// Parse a Base64 encoded signature (typically starting with `RW`).
    pub fn from_base64(encoded: &str) -> Result<Self, FormatError> {
        let (algorithm, key_number, signature) = blob::decode("signature", encoded)?;
        Ok(Signature {
            algorithm,
            key_number,
            signature,
        })
    }

    /// Parse the two-line `untrusted comment:` format held in memory.
    pub fn from_armored(text: &str) -> Result<Self, FormatError> {
        Self::from_base64(armor::payload(text)?)
    }

    /// Read and parse a `.sig` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        armor::read_payload(path)
            .and_then(|payload| Self::from_base64(&payload).map_err(|e| Error::file(path, e)))
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn key_number(&self) -> &KeyNumber {
        &self.key_number
    }

    /// The raw 64-byte Ed25519 signature.
    pub fn signature_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.signature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIG: &str = "RWRm/JNSNUb77AmgjFuNCA6+3wwVotARqp2BqrG+ZoqFaK2PB8pW/Acpo660s+DmF1pxJOTB8uXp6b1S1N+sZLZwx8G6tnxSIg0=";

    #[test]
    fn parses_valid_signature() {
        let sig = Signature::from_base64(SIG).unwrap();
        assert_eq!(sig.algorithm(), Algorithm::Ed25519);
        assert_eq!(sig.key_number().to_string(), "66fc93523546fbec");
        assert_eq!(sig.signature_bytes().len(), 64);
        assert_eq!(SIGNATURE_BLOB_LEN, 74);
    }

    #[test]
    fn rejects_public_key_blob() {
        let err = Signature::from_base64("RWRm/JNSNUb77CmSMXBAA5Owr4XzPbRO/PKDXXLIUfOgFDd/F8hT8p5t").unwrap_err();
        assert!(matches!(
            err,
            FormatError::BlobLength { kind: "signature", expected: 74, actual: 42 }
        ));
    }

    #[test]
    fn rejects_empty_input() {
        let err = Signature::from_base64("").unwrap_err();
        assert!(matches!(err, FormatError::BlobLength { expected: 74, actual: 0, .. }));
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = Signature::from_base64("RWRm/JNSNUb77Amg!FuNCA6").unwrap_err();
        assert!(matches!(err, FormatError::Base64(_)));
    }

    #[test]
    fn armored_requires_comment_header() {
        let text = format!("trusted comment: nope\n{SIG}\n");
        let err = Signature::from_armored(&text).unwrap_err();
        assert!(matches!(err, FormatError::MissingCommentHeader));
    }
}

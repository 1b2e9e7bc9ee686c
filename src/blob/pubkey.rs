//! Signify public key.

use std::path::Path;

use ed25519_dalek::PUBLIC_KEY_LENGTH;

use crate::armor;
use crate::blob::{self, Algorithm, KeyNumber};
use crate::error::{Error, FormatError};

/// Decoded length of a public key blob.
pub const PUBLIC_KEY_BLOB_LEN: usize = blob::blob_len(PUBLIC_KEY_LENGTH);

/// A signify public key: algorithm, key number and the raw Ed25519 key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    algorithm: Algorithm,
    key_number: KeyNumber,
    key: [u8; PUBLIC_KEY_LENGTH],
}

impl PublicKey {
    /// Parse a Base64 encoded public key (typically starting with `RW`).
    pub fn from_base64(encoded: &str) -> Result<Self, FormatError> {
        let (algorithm, key_number, key) = blob::decode("public key", encoded)?;
        Ok(PublicKey {
            algorithm,
            key_number,
            key,
        })
    }

    /// Parse the two-line `untrusted comment:` format held in memory.
    pub fn from_armored(text: &str) -> Result<Self, FormatError> {
        Self::from_base64(armor::payload(text)?)
    }

    /// Read and parse a public key file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let key = armor::read_payload(path)
            .and_then(|payload| Self::from_base64(&payload).map_err(|e| Error::file(path, e)))?;
        tracing::debug!(path = %path.display(), key_number = %key.key_number, "loaded public key");
        Ok(key)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn key_number(&self) -> &KeyNumber {
        &self.key_number
    }

    /// The raw 32-byte Ed25519 public key.
    pub fn key_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.key
    }
}

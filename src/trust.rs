// src/trust.rs
// Ed25519 verification of signify signatures against trusted public keys.

use std::collections::HashMap;
use std::path::Path;

use ed25519_dalek::{Signature as Ed25519Signature, VerifyingKey};
use walkdir::WalkDir;

use crate::armor;
use crate::blob::{KeyNumber, PublicKey, Signature};
use crate::error::{Error, VerificationError};

/// Verifies signify signatures made with one public key.
///
/// The key is fixed at construction. `verify` takes `&self` only, so a
/// verifier can be shared between threads.
#[derive(Debug, Clone)]
pub struct Verifier {
    public_key: PublicKey,
}

impl Verifier {
    pub fn new(public_key: PublicKey) -> Self {
        Verifier { public_key }
    }

    /// Create a verifier from a Base64 public key (typically starting with `RW`).
    pub fn from_base64(encoded: &str) -> Result<Self, Error> {
        Ok(Self::new(PublicKey::from_base64(encoded)?))
    }

    /// Create a verifier from a public key file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        Ok(Self::new(PublicKey::from_file(path)?))
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn key_number(&self) -> &KeyNumber {
        self.public_key.key_number()
    }

    /// Verify `message` against `signature`.
    ///
    /// Key numbers are compared first and a mismatch is reported as
    /// [`VerificationError::WrongKey`] without running the Ed25519 check.
    pub fn verify(&self, signature: &Signature, message: &[u8]) -> Result<(), VerificationError> {
        let expected = self.public_key.key_number();
        let actual = signature.key_number();
        if expected != actual {
            tracing::debug!(%expected, %actual, "signature made with a different key");
            return Err(VerificationError::WrongKey {
                expected: *expected,
                actual: *actual,
            });
        }

        if verify_ed25519(self.public_key.key_bytes(), signature.signature_bytes(), message) {
            tracing::debug!(key_number = %expected, len = message.len(), "signature verified");
            Ok(())
        } else {
            tracing::debug!(key_number = %expected, len = message.len(), "signature mismatch");
            Err(VerificationError::SignatureMismatch)
        }
    }

    /// Verify `message` against a Base64 encoded signature.
    pub fn verify_base64(&self, signature: &str, message: &[u8]) -> Result<(), Error> {
        let signature = Signature::from_base64(signature)?;
        Ok(self.verify(&signature, message)?)
    }

    /// Verify a message file against a `.sig` file.
    ///
    /// The message is read as opaque bytes.
    pub fn verify_file(&self, signature: impl AsRef<Path>, message: impl AsRef<Path>) -> Result<(), Error> {
        let signature = Signature::from_file(signature)?;
        let message = armor::read_message(message.as_ref())?;
        Ok(self.verify(&signature, &message)?)
    }
}

/// Raw Ed25519 check. A public key that is not a valid curve point counts as a failed check.
fn verify_ed25519(pubkey: &[u8; 32], signature: &[u8; 64], message: &[u8]) -> bool {
    let Ok(vk) = VerifyingKey::from_bytes(pubkey) else { return false };
    let sig = Ed25519Signature::from_bytes(signature);
    vk.verify_strict(message, &sig).is_ok()
}

/// A set of trusted public keys, looked up by key number.
#[derive(Debug, Clone, Default)]
pub struct Keyring {
    keys: HashMap<KeyNumber, Verifier>,
}

impl Keyring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.pub` file below `dir`.
    ///
    /// Files that do not parse are logged and skipped. A directory that
    /// cannot be read is an error.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, Error> {
        let dir = dir.as_ref();
        let mut keyring = Keyring::new();
        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                Error::io(path, e.into())
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().and_then(|s| s.to_str()) != Some("pub") {
                continue;
            }
            match PublicKey::from_file(path) {
                Ok(key) => {
                    if let Some(previous) = keyring.insert(key) {
                        tracing::warn!(
                            path = %path.display(),
                            key_number = %previous.key_number(),
                            "duplicate key number in keyring; later file wins"
                        );
                    }
                }
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping unreadable public key"),
            }
        }
        tracing::debug!(dir = %dir.display(), keys = keyring.len(), "loaded keyring");
        Ok(keyring)
    }

    /// Add a key, returning the verifier it replaced, if any.
    pub fn insert(&mut self, public_key: PublicKey) -> Option<Verifier> {
        self.keys.insert(*public_key.key_number(), Verifier::new(public_key))
    }

    pub fn get(&self, key_number: &KeyNumber) -> Option<&Verifier> {
        self.keys.get(key_number)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Verify with whichever key made `signature`.
    pub fn verify(&self, signature: &Signature, message: &[u8]) -> Result<(), VerificationError> {
        let verifier = self
            .get(signature.key_number())
            .ok_or(VerificationError::UnknownKey(*signature.key_number()))?;
        verifier.verify(signature, message)
    }

    /// Verify a message file against a `.sig` file with whichever key made it.
    pub fn verify_file(&self, signature: impl AsRef<Path>, message: impl AsRef<Path>) -> Result<(), Error> {
        let signature = Signature::from_file(signature)?;
        let message = armor::read_message(message.as_ref())?;
        Ok(self.verify(&signature, &message)?)
    }
}

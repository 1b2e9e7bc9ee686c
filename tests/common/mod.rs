//! Builders for signify blobs made from deterministic keys.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use base64::engine::general_purpose;
use base64::Engine as _;
use ed25519_dalek::{Signer, SigningKey};

pub const PUBKEY: &str = "RWRm/JNSNUb77CmSMXBAA5Owr4XzPbRO/PKDXXLIUfOgFDd/F8hT8p5t";
pub const OTHER_PUBKEY: &str = "RWSvK/c+cFe24BIalifKnqoqdvLlXfeZ9MIj3MINndNeKgyYw5PpcWGn";
pub const SIGNATURE: &str = "RWRm/JNSNUb77AmgjFuNCA6+3wwVotARqp2BqrG+ZoqFaK2PB8pW/Acpo660s+DmF1pxJOTB8uXp6b1S1N+sZLZwx8G6tnxSIg0=";

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// A signing key plus the key number signify would attach to it.
pub struct TestKey {
    pub signing: SigningKey,
    pub keynum: [u8; 8],
}

impl TestKey {
    pub fn new(seed: u8, keynum: [u8; 8]) -> Self {
        TestKey {
            signing: SigningKey::from_bytes(&[seed; 32]),
            keynum,
        }
    }

    pub fn public_b64(&self) -> String {
        encode(&self.keynum, self.signing.verifying_key().as_bytes())
    }

    pub fn sign_raw(&self, message: &[u8]) -> [u8; 64] {
        self.signing.sign(message).to_bytes()
    }

    pub fn sign_b64(&self, message: &[u8]) -> String {
        encode(&self.keynum, &self.sign_raw(message))
    }
}

/// `"Ed" | keynum | material`, Base64 encoded.
pub fn encode(keynum: &[u8; 8], material: &[u8]) -> String {
    let mut blob = b"Ed".to_vec();
    blob.extend_from_slice(keynum);
    blob.extend_from_slice(material);
    general_purpose::STANDARD.encode(blob)
}

pub fn armored(comment: &str, payload: &str) -> String {
    format!("untrusted comment: {comment}\n{payload}\n")
}

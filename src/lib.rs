//! Verification of OpenBSD signify signatures.
//!
//! Signify keys and signatures are Base64 blobs of the form
//! `[algorithm "Ed" | 8-byte key number | Ed25519 material]`, usually stored
//! in files with an `untrusted comment:` line above the payload.
//!
//! ```
//! use signify_verify::Verifier;
//!
//! let verifier = Verifier::from_base64("RWRm/JNSNUb77CmSMXBAA5Owr4XzPbRO/PKDXXLIUfOgFDd/F8hT8p5t")?;
//! verifier.verify_base64(
//!     "RWRm/JNSNUb77AmgjFuNCA6+3wwVotARqp2BqrG+ZoqFaK2PB8pW/Acpo660s+DmF1pxJOTB8uXp6b1S1N+sZLZwx8G6tnxSIg0=",
//!     b"testmessage\n",
//! )?;
//! # Ok::<(), signify_verify::Error>(())
//! ```
//!
//! A [`Keyring`] holds several keys and selects one by the signature's key number.

pub mod armor;
pub mod blob;
pub mod config;
pub mod error;
pub mod trust;

pub use blob::{Algorithm, KeyNumber, PublicKey, Signature};
pub use error::{Error, FormatError, VerificationError};
pub use trust::{Keyring, Verifier};

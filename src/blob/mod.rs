//! Binary layout shared by signify public keys and signatures.
//!
//! A decoded blob is `[algorithm | key number | raw material]`. Offsets are
//! derived from the component lengths and the total length is checked before
//! anything is sliced.

pub mod algorithm;
pub mod keynum;
pub mod pubkey;
pub mod sig;

pub use algorithm::Algorithm;
pub use keynum::KeyNumber;
pub use pubkey::PublicKey;
pub use sig::Signature;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::error::FormatError;

const ALGORITHM_START: usize = 0;
const KEYNUM_START: usize = ALGORITHM_START + Algorithm::LEN;
const MATERIAL_START: usize = KEYNUM_START + KeyNumber::LEN;

/// Standard alphabet; padding optional and trailing bits tolerated so that
/// truncated input is reported by its decoded length.
const SIGNIFY_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Total decoded length of a blob carrying `material_len` bytes.
pub const fn blob_len(material_len: usize) -> usize {
    MATERIAL_START + material_len
}

/// Decode a Base64 blob and split it into its typed parts.
pub(crate) fn decode<const N: usize>(
    kind: &'static str,
    encoded: &str,
) -> Result<(Algorithm, KeyNumber, [u8; N]), FormatError> {
    let decoded = SIGNIFY_BASE64.decode(encoded)?;
    split(kind, &decoded)
}

pub(crate) fn split<const N: usize>(
    kind: &'static str,
    decoded: &[u8],
) -> Result<(Algorithm, KeyNumber, [u8; N]), FormatError> {
    let expected = blob_len(N);
    if decoded.len() != expected {
        return Err(FormatError::BlobLength {
            kind,
            expected,
            actual: decoded.len(),
        });
    }

    let algorithm = Algorithm::try_from(&decoded[ALGORITHM_START..KEYNUM_START])?;
    let key_number = KeyNumber::try_from(&decoded[KEYNUM_START..MATERIAL_START])?;
    let mut material = [0u8; N];
    material.copy_from_slice(&decoded[MATERIAL_START..]);
    Ok((algorithm, key_number, material))
}

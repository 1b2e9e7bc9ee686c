//! Error types for signify parsing and verification.

use std::path::PathBuf;

use crate::blob::KeyNumber;

/// Malformed key or signature input.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The algorithm tag is not `Ed`.
    #[error("unsupported algorithm {0:?}; must equal 'Ed'")]
    UnsupportedAlgorithm(Vec<u8>),

    /// A key number was not exactly 8 bytes.
    #[error("key number length must be {expected}, but was {actual}")]
    KeyNumberLength { expected: usize, actual: usize },

    /// The decoded blob has the wrong total length.
    #[error("decoded {kind} total length must be {expected}, but was {actual}")]
    BlobLength {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The payload is not valid Base64.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The first line does not start with `untrusted comment: `.
    #[error("invalid comment; must start with 'untrusted comment: '")]
    MissingCommentHeader,

    /// The comment line is not followed by a payload line.
    #[error("missing base64 payload line")]
    MissingPayload,

    /// The file is not UTF-8 text.
    #[error("file is not valid UTF-8")]
    NotUtf8,
}

/// A structurally valid signature that does not verify.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    /// The signature was made with a different key than the one checked against.
    #[error("verification failed: checked against wrong key (key {expected}, signature {actual})")]
    WrongKey { expected: KeyNumber, actual: KeyNumber },

    /// Key numbers matched but the Ed25519 check failed.
    #[error("signature verification failed")]
    SignatureMismatch,

    /// No key in the keyring carries the signature's key number.
    #[error("no public key with key number {0}")]
    UnknownKey(KeyNumber),
}

/// Top-level error for everything the crate does.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A key, signature or message file could not be read.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file was read but its content is malformed.
    #[error("invalid file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error(transparent)]
    Verification(#[from] VerificationError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    pub(crate) fn file(path: impl Into<PathBuf>, source: FormatError) -> Self {
        Error::File { path: path.into(), source }
    }

    /// The verification failure, if this error is one.
    pub fn verification(&self) -> Option<&VerificationError> {
        match self {
            Error::Verification(e) => Some(e),
            _ => None,
        }
    }

    /// The format failure, if this error is one, including those tied to a file.
    pub fn format(&self) -> Option<&FormatError> {
        match self {
            Error::Format(e) | Error::File { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

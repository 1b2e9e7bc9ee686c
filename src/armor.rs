//! The signify file format: an `untrusted comment:` line followed by a
//! Base64 payload line.

use std::fs;
use std::path::Path;

use crate::error::{Error, FormatError};

pub const COMMENT_HEADER: &str = "untrusted comment: ";

/// Extract the Base64 payload from the two-line text form.
///
/// The comment itself is free text and is not returned. Anything after the
/// payload line is ignored.
pub fn payload(text: &str) -> Result<&str, FormatError> {
    let mut lines = text.lines();
    match lines.next() {
        Some(comment) if comment.starts_with(COMMENT_HEADER) => {}
        _ => return Err(FormatError::MissingCommentHeader),
    }
    match lines.next().map(str::trim) {
        Some(payload) if !payload.is_empty() => Ok(payload),
        _ => Err(FormatError::MissingPayload),
    }
}

/// Comment text of an armored file, without the header prefix.
pub fn comment(text: &str) -> Option<&str> {
    text.lines().next()?.strip_prefix(COMMENT_HEADER)
}

/// Read a file and return its payload line.
pub fn read_payload(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|_| Error::file(path, FormatError::NotUtf8))?;
    payload(&text)
        .map(str::to_owned)
        .map_err(|e| Error::file(path, e))
}

/// Read a message file as opaque bytes.
pub fn read_message(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

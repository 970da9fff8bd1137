//! Errors raised while decoding an index buffer

use thiserror::Error;

/// Structured failure of a decode call.
///
/// Every variant aborts the decode; there is no partially decoded index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The buffer is smaller than a fixed structural minimum (e.g. the 12-byte header).
    #[error("Index too short: expected at least {needed} bytes, found {available}")]
    TooShort { needed: usize, available: usize },

    /// A field read would run past the end of the buffer.
    #[error("Read of {width} bytes at offset {offset} exceeds buffer of {available} bytes")]
    OutOfBounds {
        offset: usize,
        width: usize,
        available: usize,
    },

    /// A name scan reached the end of the buffer without finding a nul byte.
    #[error("Unterminated entry name starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// The signature does not identify an index file (strict mode only).
    #[error("Invalid index file signature: {signature:?}")]
    Malformed { signature: [u8; 4] },

    /// The format version is outside the supported set (strict mode only).
    #[error("Unsupported index file version: {version}")]
    UnsupportedVersion { version: u32 },
}

impl DecodeError {
    /// Adds `base` to the offset carried by the error.
    ///
    /// Entry decoding works on a slice starting at the entry, so offsets it reports
    /// are relative to that slice until the orchestrator rebases them.
    pub(crate) fn rebase(self, base: usize) -> Self {
        match self {
            DecodeError::OutOfBounds {
                offset,
                width,
                available,
            } => DecodeError::OutOfBounds {
                offset: offset + base,
                width,
                available: available + base,
            },
            DecodeError::UnterminatedString { offset } => DecodeError::UnterminatedString {
                offset: offset + base,
            },
            other => other,
        }
    }
}

//! Git index file format
//!
//! The index (also called staging area or cache) stores information about the working tree.
//! This module decodes it from a byte buffer in a single forward pass.
//!
//! ## File Format (Versions 2 and 3)
//!
//! ```text
//! Header (12 bytes):
//!   - Signature: "DIRC" (4 bytes)
//!   - Version (4 bytes, big-endian)
//!   - Entry count (4 bytes, big-endian)
//!
//! Entries (variable length):
//!   - 10 x 4-byte stat fields, 20-byte SHA-1, 2-byte flags
//!   - 2-byte extended flags when the extended bit is set (version 3)
//!   - Nul-terminated path, zero-padded to an 8-byte boundary
//!
//! Trailer:
//!   - 20-byte SHA-1 checksum, or
//!   - 4-byte extension signature followed by the extension body
//! ```
//!
//! ## Components
//!
//! - `byte_cursor`: bounds-checked big-endian reads
//! - `index_header`: the 12-byte header
//! - `index_entry`: one variable-length entry and its padding
//! - `extension`: classification of the bytes after the last entry
//! - `decoder`: the orchestrator tying them together

pub mod byte_cursor;
pub mod decoder;
pub mod entry_flags;
pub mod entry_mode;
pub mod error;
pub mod extension;
pub mod index_entry;
pub mod index_header;

pub use decoder::{
    Advisory, DecodeOptions, DecodedIndex, decode, decode_with, header_advisories,
};
pub use error::DecodeError;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20; // SHA1 produces a 20-byte hash

/// Size of index header in bytes
pub const HEADER_SIZE: usize = 12; // 4 bytes for marker, 4 for version, 4 for entries_count

/// Magic signature identifying index files
pub const SIGNATURE: &[u8; 4] = b"DIRC";

/// Versions whose entry layout this decoder understands
pub const SUPPORTED_VERSIONS: [u32; 2] = [2, 3];

/// Result of a decode step
pub type Result<T> = std::result::Result<T, DecodeError>;

//! Index decoding
//!
//! A decode walks the buffer once, front to back:
//!
//! 1. header (12 bytes)
//! 2. exactly `entries_count` entries, each advanced past by its padded length
//! 3. whatever remains is classified as the tail
//!
//! The first failure aborts the whole decode. A half-decoded index is never returned.

use crate::artifacts::index::byte_cursor::ByteCursor;
use crate::artifacts::index::extension::Tail;
use crate::artifacts::index::index_entry::{ENTRY_MIN_SIZE, IndexEntry, MAX_PATH_SIZE};
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::Result;

/// Knobs for a decode call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    strict: bool,
    name_limit: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            strict: false,
            name_limit: MAX_PATH_SIZE,
        }
    }
}

impl DecodeOptions {
    /// Reject a bad signature or an unsupported version instead of flagging it
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Longest entry name kept in the decoded index, in bytes
    pub fn name_limit(mut self, name_limit: usize) -> Self {
        self.name_limit = name_limit;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

/// Non-fatal findings recorded while decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    UnsupportedVersion(u32),
    UnexpectedSignature([u8; 4]),
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::UnsupportedVersion(version) => {
                write!(f, "unsupported index version {version}")
            }
            Advisory::UnexpectedSignature(signature) => write!(
                f,
                "unexpected index signature '{}'",
                String::from_utf8_lossy(signature)
            ),
        }
    }
}

/// A fully decoded index
///
/// Owns copies of everything it holds; the source buffer can be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedIndex {
    header: IndexHeader,
    entries: Vec<IndexEntry>,
    tail: Tail,
    advisories: Vec<Advisory>,
}

impl DecodedIndex {
    pub fn header(&self) -> &IndexHeader {
        &self.header
    }

    /// Entries in on-disk order
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> impl Iterator<Item = IndexEntry> {
        self.entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tail(&self) -> &Tail {
        &self.tail
    }

    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }
}

/// Non-fatal findings about a header that was decoded leniently
pub fn header_advisories(header: &IndexHeader) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if !header.has_valid_signature() {
        tracing::warn!(signature = %header.signature_str(), "unexpected index signature");
        advisories.push(Advisory::UnexpectedSignature(header.signature));
    }

    if !header.has_supported_version() {
        tracing::warn!(version = header.version, "unsupported index version");
        advisories.push(Advisory::UnsupportedVersion(header.version));
    }

    advisories
}

/// Decode `bytes` with default options
pub fn decode(bytes: &[u8]) -> Result<DecodedIndex> {
    decode_with(bytes, &DecodeOptions::default())
}

pub fn decode_with(bytes: &[u8], options: &DecodeOptions) -> Result<DecodedIndex> {
    let (header, consumed) = IndexHeader::decode(bytes, options.strict)?;
    tracing::debug!(
        signature = %header.signature_str(),
        version = header.version,
        entries = header.entries_count,
        "read index header"
    );

    let advisories = header_advisories(&header);

    let mut cursor = ByteCursor::new(bytes);
    cursor.advance(consumed)?;

    // the declared count is untrusted; never reserve more than the buffer could hold
    let capacity =
        (header.entries_count as usize).min(cursor.remaining().len() / ENTRY_MIN_SIZE);
    let mut entries = Vec::with_capacity(capacity);

    for position in 0..header.entries_count {
        let offset = cursor.position();
        let (entry, length) = IndexEntry::decode(cursor.remaining(), options.name_limit)
            .map_err(|err| err.rebase(offset))?;

        tracing::trace!(
            position,
            offset,
            name = %entry.name,
            padded = length.padded,
            "read index entry"
        );

        cursor.advance(length.padded)?;
        entries.push(entry);
    }

    let tail = Tail::classify(cursor.remaining(), bytes.len());

    Ok(DecodedIndex {
        header,
        entries,
        tail,
        advisories,
    })
}

//! Classification of the bytes following the last entry
//!
//! An index ends either with its 20-byte checksum or with an extension block:
//! a 4-byte signature, a 4-byte big-endian body size and the body itself.
//! Only the first block is looked at; bodies are never parsed.

use crate::artifacts::index::CHECKSUM_SIZE;
use crate::artifacts::index::byte_cursor::ByteCursor;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;

/// Size of an extension signature in bytes
pub const EXTENSION_SIGNATURE_SIZE: usize = 4;

/// Signature plus the size field that follows it
pub const EXTENSION_HEADER_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionKind {
    CacheTree,
    ResolveUndo,
    SplitIndex,
    UntrackedCache,
    FsMonitor,
    EndOfIndexEntry,
    IndexEntryOffsetTable,
    SparseDirectories,
}

impl ExtensionKind {
    pub fn description(&self) -> &'static str {
        match self {
            ExtensionKind::CacheTree => "cache tree",
            ExtensionKind::ResolveUndo => "resolve undo",
            ExtensionKind::SplitIndex => "split index",
            ExtensionKind::UntrackedCache => "untracked cache",
            ExtensionKind::FsMonitor => "file system monitor cache",
            ExtensionKind::EndOfIndexEntry => "end of index entry",
            ExtensionKind::IndexEntryOffsetTable => "index entry offset table",
            ExtensionKind::SparseDirectories => "sparse directory entries",
        }
    }
}

pub const KNOWN_EXTENSIONS: phf::Map<&'static str, ExtensionKind> = phf::phf_map! {
    "TREE" => ExtensionKind::CacheTree,
    "REUC" => ExtensionKind::ResolveUndo,
    "link" => ExtensionKind::SplitIndex,
    "UNTR" => ExtensionKind::UntrackedCache,
    "FSMN" => ExtensionKind::FsMonitor,
    "EOIE" => ExtensionKind::EndOfIndexEntry,
    "IEOT" => ExtensionKind::IndexEntryOffsetTable,
    "sdir" => ExtensionKind::SparseDirectories,
};

/// Look up a signature in the closed set of known extensions
pub fn extension_kind(signature: &[u8; EXTENSION_SIGNATURE_SIZE]) -> Option<ExtensionKind> {
    std::str::from_utf8(signature)
        .ok()
        .and_then(|tag| KNOWN_EXTENSIONS.get(tag))
        .copied()
}

/// First extension block found after the entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionBlock {
    pub signature: [u8; EXTENSION_SIGNATURE_SIZE],
    pub kind: Option<ExtensionKind>,
    /// Body size announced after the signature, when at least 8 bytes remain
    pub declared_size: Option<u32>,
    /// Everything after the signature, unparsed
    pub body: Bytes,
}

impl ExtensionBlock {
    pub fn is_recognized(&self) -> bool {
        self.kind.is_some()
    }

    pub fn signature_str(&self) -> String {
        String::from_utf8_lossy(&self.signature).into_owned()
    }
}

/// What the bytes after the last entry turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tail {
    /// The buffer ends right after the entries
    None,
    /// Fewer than 4 bytes remain, too few for a signature
    Truncated(Bytes),
    /// Exactly 20 bytes remain; never verified
    Checksum(ObjectId),
    RecognizedExtension(ExtensionBlock),
    UnrecognizedExtension(ExtensionBlock),
}

impl Tail {
    /// Classify `remaining`, the bytes left once every entry has been consumed
    ///
    /// `total_len` is the length of the whole buffer and only locates the tail
    /// for diagnostics. Classification never fails.
    pub fn classify(remaining: &[u8], total_len: usize) -> Self {
        let offset = total_len.saturating_sub(remaining.len());
        let cursor = ByteCursor::new(remaining);

        if let Ok(checksum) = <[u8; CHECKSUM_SIZE]>::try_from(remaining) {
            tracing::debug!(offset, "trailing checksum");
            return Tail::Checksum(ObjectId::new(checksum));
        }

        let signature = match cursor.read_array::<EXTENSION_SIGNATURE_SIZE>(0) {
            Ok(signature) => signature,
            Err(_) if remaining.is_empty() => {
                tracing::debug!(offset, "no trailing data");
                return Tail::None;
            }
            Err(_) => {
                tracing::debug!(offset, len = remaining.len(), "truncated trailer");
                return Tail::Truncated(Bytes::copy_from_slice(remaining));
            }
        };

        let block = ExtensionBlock {
            signature,
            kind: extension_kind(&signature),
            declared_size: cursor.read_u32_be(EXTENSION_SIGNATURE_SIZE).ok(),
            body: Bytes::copy_from_slice(&remaining[EXTENSION_SIGNATURE_SIZE..]),
        };

        tracing::debug!(
            offset,
            signature = %block.signature_str(),
            kind = block.kind.map_or("unknown", |kind| kind.description()),
            "extension block"
        );

        if block.is_recognized() {
            Tail::RecognizedExtension(block)
        } else {
            Tail::UnrecognizedExtension(block)
        }
    }

    pub fn checksum(&self) -> Option<&ObjectId> {
        match self {
            Tail::Checksum(checksum) => Some(checksum),
            _ => None,
        }
    }

    pub fn extension(&self) -> Option<&ExtensionBlock> {
        match self {
            Tail::RecognizedExtension(block) | Tail::UnrecognizedExtension(block) => Some(block),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tail::None => write!(f, "no trailing data"),
            Tail::Truncated(bytes) => write!(f, "truncated trailer ({} bytes)", bytes.len()),
            Tail::Checksum(checksum) => write!(f, "checksum: {checksum}"),
            Tail::RecognizedExtension(block) => match block.declared_size {
                Some(size) => write!(f, "extension: {} ({size} bytes)", block.signature_str()),
                None => write!(f, "extension: {}", block.signature_str()),
            },
            Tail::UnrecognizedExtension(block) => {
                write!(f, "unknown extension '{}'", block.signature_str())
            }
        }
    }
}

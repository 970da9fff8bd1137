//! Index entry representation
//!
//! Each entry in the index represents a staged file with:
//! - File path
//! - Content hash (object ID)
//! - File metadata (mode, size, timestamps)
//!
//! ## Entry Format
//!
//! Entries are stored with 8-byte alignment measured from the entry's first byte:
//!
//! ```text
//! offset  size  field
//!      0     4  ctime seconds
//!      4     4  ctime nanoseconds
//!      8     4  mtime seconds
//!     12     4  mtime nanoseconds
//!     16     4  dev
//!     20     4  ino
//!     24     4  mode
//!     28     4  uid
//!     32     4  gid
//!     36     4  size
//!     40    20  SHA-1
//!     60     2  flags
//!    (62     2  extended flags, only when the extended bit is set)
//!     62     -  path, nul-terminated, then zero padding
//! ```

use crate::artifacts::index::Result;
use crate::artifacts::index::byte_cursor::ByteCursor;
use crate::artifacts::index::entry_flags::{EntryFlags, ExtendedFlags};
use crate::artifacts::index::entry_mode::EntryMode;
use crate::artifacts::objects::OBJECT_ID_SIZE;
use crate::artifacts::objects::object_id::ObjectId;
use chrono::{DateTime, SecondsFormat};
use derive_new::new;

/// Block size for entry alignment (8 bytes)
pub const ENTRY_BLOCK: usize = 8;

/// Bytes before the path: ten 4-byte stat fields, the SHA-1 and the flags
pub const ENTRY_FIXED_SIZE: usize = 62;

/// Smallest possible entry once padded: fixed fields, a short name and its terminator
pub const ENTRY_MIN_SIZE: usize = 64;

/// Size of the optional extended flags field
pub const EXTENDED_FLAGS_SIZE: usize = 2;

/// Default cap on the stored path length
pub const MAX_PATH_SIZE: usize = 4096;

/// Smallest multiple of [`ENTRY_BLOCK`] that holds `unpadded` bytes
pub fn padded_len(unpadded: usize) -> usize {
    unpadded.next_multiple_of(ENTRY_BLOCK)
}

/// A timestamp as stored in the index: seconds and nanoseconds since the epoch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct EntryTime {
    pub seconds: u32,
    pub nanoseconds: u32,
}

impl EntryTime {
    /// RFC 3339 rendering in UTC, or `None` if the nanoseconds are out of range
    pub fn to_rfc3339(&self) -> Option<String> {
        DateTime::from_timestamp(i64::from(self.seconds), self.nanoseconds)
            .map(|time| time.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl std::fmt::Display for EntryTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.seconds, self.nanoseconds)
    }
}

/// File metadata stored in index entries
///
/// All stat fields are truncated to 32 bits on disk and kept that way here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryMetadata {
    /// Status change time
    pub ctime: EntryTime,
    /// Content modification time
    pub mtime: EntryTime,
    pub dev: u32,
    pub ino: u32,
    /// Object type and permission bits
    pub mode: EntryMode,
    pub uid: u32,
    pub gid: u32,
    /// File size in bytes
    pub size: u32,
    pub flags: EntryFlags,
    /// Present only when `flags` has the extended bit set
    pub extended_flags: Option<ExtendedFlags>,
}

/// Bytes consumed by one entry, before and after alignment padding
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct EntryLength {
    pub unpadded: usize,
    pub padded: usize,
}

impl EntryLength {
    pub fn padding(&self) -> usize {
        self.padded - self.unpadded
    }
}

/// Index entry representing a staged file
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct IndexEntry {
    /// File path relative to repository root
    pub name: String,
    /// SHA-1 hash of file content
    pub oid: ObjectId,
    pub metadata: EntryMetadata,
}

impl IndexEntry {
    /// Decode one entry from a slice starting at its first byte
    ///
    /// The path length comes from scanning for the nul terminator, never from the
    /// 12-bit length in the flags. Paths longer than `name_limit` bytes are truncated
    /// in the decoded entry but fully accounted for in the returned length.
    ///
    /// Padding is computed, not read: the caller advances by `padded` and is the one
    /// to notice if the buffer ends inside it.
    pub fn decode(bytes: &[u8], name_limit: usize) -> Result<(Self, EntryLength)> {
        let mut cursor = ByteCursor::new(bytes);

        let ctime_seconds = cursor.next_u32()?;
        let ctime_nanoseconds = cursor.next_u32()?;
        let mtime_seconds = cursor.next_u32()?;
        let mtime_nanoseconds = cursor.next_u32()?;
        let dev = cursor.next_u32()?;
        let ino = cursor.next_u32()?;
        let mode = EntryMode::from(cursor.next_u32()?);
        let uid = cursor.next_u32()?;
        let gid = cursor.next_u32()?;
        let size = cursor.next_u32()?;
        let oid = ObjectId::new(cursor.next_array::<OBJECT_ID_SIZE>()?);
        let flags = EntryFlags::from_bits_retain(cursor.next_u16()?);

        let extended_flags = if flags.is_extended() {
            Some(ExtendedFlags::from_bits_retain(cursor.next_u16()?))
        } else {
            None
        };

        let mut name_bytes = cursor.next_cstr()?;
        if name_bytes.len() > name_limit {
            tracing::warn!(
                length = name_bytes.len(),
                limit = name_limit,
                "truncating entry name"
            );
            name_bytes = &name_bytes[..name_limit];
        }
        let name = String::from_utf8_lossy(name_bytes).into_owned();

        let unpadded = cursor.position();
        let length = EntryLength::new(unpadded, padded_len(unpadded));

        let entry = IndexEntry {
            name,
            oid,
            metadata: EntryMetadata {
                ctime: EntryTime::new(ctime_seconds, ctime_nanoseconds),
                mtime: EntryTime::new(mtime_seconds, mtime_nanoseconds),
                dev,
                ino,
                mode,
                uid,
                gid,
                size,
                flags,
                extended_flags,
            },
        };

        Ok((entry, length))
    }

    pub fn stage(&self) -> u8 {
        self.metadata.flags.stage()
    }

    pub fn mode(&self) -> EntryMode {
        self.metadata.mode
    }

    /// Indented detail lines, optionally annotating timestamps in UTC
    pub fn details(&self, human_time: bool) -> EntryDetails<'_> {
        EntryDetails {
            entry: self,
            human_time,
        }
    }
}

/// Display adapter for the metadata block printed under an entry's name
pub struct EntryDetails<'e> {
    entry: &'e IndexEntry,
    human_time: bool,
}

impl EntryDetails<'_> {
    fn fmt_time(&self, time: &EntryTime) -> String {
        match time.to_rfc3339() {
            Some(readable) if self.human_time => format!("{time} ({readable})"),
            _ => time.to_string(),
        }
    }
}

impl std::fmt::Display for EntryDetails<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let metadata = &self.entry.metadata;

        writeln!(f, "  mode: {}", metadata.mode)?;
        writeln!(f, "  ctime: {}", self.fmt_time(&metadata.ctime))?;
        writeln!(f, "  mtime: {}", self.fmt_time(&metadata.mtime))?;
        writeln!(f, "  dev: {}\tino: {}", metadata.dev, metadata.ino)?;
        writeln!(f, "  uid: {}\tgid: {}", metadata.uid, metadata.gid)?;
        writeln!(
            f,
            "  size: {}\tflags: {}",
            metadata.size,
            metadata.flags.without_name_length()
        )?;
        write!(f, "  SHA-1: {}", self.entry.oid)
    }
}

impl std::fmt::Display for IndexEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        write!(f, "{}", self.details(false))
    }
}

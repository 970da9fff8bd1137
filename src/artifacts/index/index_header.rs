use crate::artifacts::index::byte_cursor::ByteCursor;
use crate::artifacts::index::error::DecodeError;
use crate::artifacts::index::{HEADER_SIZE, Result, SIGNATURE, SUPPORTED_VERSIONS};
use derive_new::new;

/// The fixed 12-byte header at the start of every index file
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexHeader {
    pub signature: [u8; 4],
    pub version: u32,
    pub entries_count: u32,
}

impl IndexHeader {
    /// Decode the header from the start of `bytes`
    ///
    /// The signature is copied as-is. With `strict` set, anything other than
    /// `DIRC` is rejected as [`DecodeError::Malformed`] and a version outside
    /// [`SUPPORTED_VERSIONS`] as [`DecodeError::UnsupportedVersion`].
    ///
    /// # Returns
    ///
    /// The header and the number of bytes consumed (always [`HEADER_SIZE`])
    pub fn decode(bytes: &[u8], strict: bool) -> Result<(Self, usize)> {
        if bytes.len() < HEADER_SIZE {
            return Err(DecodeError::TooShort {
                needed: HEADER_SIZE,
                available: bytes.len(),
            });
        }

        let mut cursor = ByteCursor::new(bytes);
        let signature = cursor.next_array::<4>()?;
        let version = cursor.next_u32()?;
        let entries_count = cursor.next_u32()?;

        let header = IndexHeader::new(signature, version, entries_count);
        if strict && !header.has_valid_signature() {
            return Err(DecodeError::Malformed { signature });
        }
        if strict && !header.has_supported_version() {
            return Err(DecodeError::UnsupportedVersion { version });
        }

        Ok((header, cursor.position()))
    }

    pub fn has_valid_signature(&self) -> bool {
        &self.signature == SIGNATURE
    }

    pub fn has_supported_version(&self) -> bool {
        SUPPORTED_VERSIONS.contains(&self.version)
    }

    /// Signature rendered as text, with non-ASCII bytes replaced
    pub fn signature_str(&self) -> String {
        String::from_utf8_lossy(&self.signature).into_owned()
    }
}

/// Cheap probe for the `DIRC` signature, without decoding anything else
pub fn has_index_signature(bytes: &[u8]) -> bool {
    bytes.starts_with(SIGNATURE)
}

impl std::fmt::Display for IndexHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "signature: {}", self.signature_str())?;
        writeln!(f, "version:   {}", self.version)?;
        write!(f, "entries:   {}", self.entries_count)
    }
}

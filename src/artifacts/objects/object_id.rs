//! Git object identifier (SHA-1 hash)
//!
//! On disk an object ID is 20 raw bytes. It is displayed as a 40-character
//! lowercase hexadecimal string.

use crate::artifacts::objects::OBJECT_ID_SIZE;
use std::fmt::Write;

/// Git object identifier (SHA-1 hash)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId([u8; OBJECT_ID_SIZE]);

impl ObjectId {
    pub fn new(bytes: [u8; OBJECT_ID_SIZE]) -> Self {
        ObjectId(bytes)
    }

    /// Lowercase hexadecimal rendering, two digits per byte
    pub fn to_hex(&self) -> String {
        self.0
            .iter()
            .fold(String::with_capacity(2 * OBJECT_ID_SIZE), |mut hex, byte| {
                let _ = write!(hex, "{byte:02x}");
                hex
            })
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

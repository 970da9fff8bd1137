//! Decoding of the 32-bit entry mode
//!
//! The mode packs a 4-bit object type above 9 unix permission bits:
//!
//! ```text
//! 1000 000 rwxrwxrwx  regular file (100644 / 100755)
//! 1010 000 000000000  symbolic link (120000)
//! 1110 000 000000000  gitlink (160000)
//! ```

const TYPE_SHIFT: u32 = 12;
const PERMISSION_MASK: u32 = 0o777;

#[derive(Debug, Clone, Copy, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub enum ObjectType {
    Regular,
    Symlink,
    Gitlink,
    /// Type bits this decoder does not recognise
    Unknown(u32),
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Regular => "regular",
            ObjectType::Symlink => "symlink",
            ObjectType::Gitlink => "gitlink",
            ObjectType::Unknown(_) => "unknown",
        }
    }
}

impl From<u32> for ObjectType {
    fn from(type_bits: u32) -> Self {
        match type_bits {
            0b1000 => ObjectType::Regular,
            0b1010 => ObjectType::Symlink,
            0b1110 => ObjectType::Gitlink,
            other => ObjectType::Unknown(other),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw entry mode with typed accessors
#[derive(Debug, Clone, Copy, Eq, Ord, Default, PartialEq, PartialOrd, Hash)]
pub struct EntryMode(u32);

impl EntryMode {
    pub fn object_type(&self) -> ObjectType {
        ObjectType::from(self.0 >> TYPE_SHIFT)
    }

    pub fn permissions(&self) -> u32 {
        self.0 & PERMISSION_MASK
    }

    pub fn is_executable(&self) -> bool {
        self.object_type() == ObjectType::Regular && self.0 & 0o111 != 0
    }
}

impl From<u32> for EntryMode {
    fn from(mode: u32) -> Self {
        EntryMode(mode)
    }
}

impl std::fmt::Display for EntryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06o}", self.0)
    }
}

//! Bit-packed flag fields of an index entry
//!
//! ```text
//! flags (16 bits):           1 valid | 1 extended | 2 stage | 12 name length
//! extended flags (16 bits):  1 reserved | 1 skip-worktree | 1 intent-to-add | 13 unused
//! ```
//!
//! The name length saturates at 0xFFF, so it is only ever advisory; the decoder
//! takes the real length from the nul terminator.

use bitflags::bitflags;

const STAGE_SHIFT: u16 = 12;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct EntryFlags: u16 {
        const VALID = 1 << 15;
        const EXTENDED = 1 << 14;
        const STAGE = 0b11 << 12;
        const NAME_LENGTH = 0x0FFF;
    }
}

impl EntryFlags {
    /// Merge stage: 0 for a normal entry, 1-3 for conflict variants
    pub fn stage(&self) -> u8 {
        ((self.bits() & Self::STAGE.bits()) >> STAGE_SHIFT) as u8
    }

    /// Name length as recorded in the flags, capped at 0xFFF
    pub fn name_length(&self) -> u16 {
        self.bits() & Self::NAME_LENGTH.bits()
    }

    pub fn is_extended(&self) -> bool {
        self.contains(Self::EXTENDED)
    }

    /// Flag bits with the name length masked out
    pub fn without_name_length(&self) -> u16 {
        self.bits() & !Self::NAME_LENGTH.bits()
    }
}

impl Default for EntryFlags {
    fn default() -> Self {
        Self::empty()
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ExtendedFlags: u16 {
        const RESERVED = 1 << 15;
        const SKIP_WORKTREE = 1 << 14;
        const INTENT_TO_ADD = 1 << 13;
    }
}

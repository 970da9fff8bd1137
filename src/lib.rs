//! # gitdex
//!
//! Decoder and inspector for git index (`.git/index`, "DIRC") files.
//!
//! ```no_run
//! let bytes = std::fs::read(".git/index")?;
//! let index = gitdex::decode(&bytes)?;
//! for entry in index.entries() {
//!     println!("{} {}", entry.mode(), entry.name);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::index::{DecodeError, DecodeOptions, DecodedIndex, decode, decode_with};

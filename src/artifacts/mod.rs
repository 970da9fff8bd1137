//! Index data structures and decoding
//!
//! - `core`: Terminal output helpers (pager wrapper, color detection)
//! - `index`: Index file format and its decoder
//! - `objects`: Object identifiers (SHA-1 hashes)

pub mod core;
pub mod index;
pub mod objects;

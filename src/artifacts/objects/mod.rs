//! Object identifiers stored in the index
//!
//! Index entries and the index trailer carry SHA-1 hashes in their raw 20-byte form.
//! [`object_id::ObjectId`] keeps them that way and renders them as lowercase hex.

pub mod object_id;

/// Length of a SHA-1 hash in bytes
pub const OBJECT_ID_SIZE: usize = 20;

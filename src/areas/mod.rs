//! Tool components
//!
//! - `index`: Loading an index file from disk
//! - `viewer`: Decoding an index file and rendering it to a writer

pub mod index;
pub mod viewer;

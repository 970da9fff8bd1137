//! Command implementations
//!
//! Every command is a method on [`crate::areas::viewer::Viewer`] that decodes the
//! index file and writes its rendering to the viewer's writer.
//!
//! - `show`: full dump (header, entries, trailer, warnings)
//! - `header`: the 12-byte header only
//! - `ls_files`: entry names, optionally in `git ls-files --stage` format
//! - `tail`: classification of the bytes after the last entry

pub mod plumbing;

//! Index file on disk
//!
//! Loads the raw bytes of an index file and hands them to the decoder.
//!
//! ## Limits
//!
//! Files larger than the caller's `max_size` are refused before (and while) being
//! read, so a bogus path cannot make the tool buffer an arbitrarily large file.
//!
//! ## Locking
//!
//! A shared lock is held on the file while it is read, so a concurrent writer
//! holding an exclusive lock is waited for rather than read half-written.

use crate::artifacts::index::index_header::has_index_signature;
use crate::artifacts::index::{DecodeOptions, DecodedIndex, decode_with};
use anyhow::{Context, anyhow};
use bytes::Bytes;
use std::io::Read;
use std::ops::DerefMut;
use std::path::Path;

/// Default cap on the size of an index file (64 MiB)
pub const DEFAULT_MAX_SIZE: u64 = 64 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct IndexFile {
    /// Path to the index file (typically `.git/index`)
    path: Box<Path>,
}

impl IndexFile {
    pub fn new(path: Box<Path>) -> Self {
        IndexFile { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file into memory
    ///
    /// Fails if the file does not exist, cannot be read, or holds more than
    /// `max_size` bytes.
    pub fn load(&self, max_size: u64) -> anyhow::Result<Bytes> {
        if !self.path().exists() {
            return Err(anyhow!("Index file not found: {}", self.path().display()));
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .with_context(|| format!("Failed to open {}", self.path().display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        let size = lock.deref_mut().metadata()?.len();
        if size > max_size {
            return Err(anyhow!(
                "Index file is too large: {size} bytes (limit {max_size})"
            ));
        }

        let mut buffer = Vec::with_capacity(size as usize);
        lock.deref_mut()
            .take(max_size.saturating_add(1))
            .read_to_end(&mut buffer)
            .with_context(|| format!("Failed to read {}", self.path().display()))?;

        // the file may have grown since it was stat'ed
        if buffer.len() as u64 > max_size {
            return Err(anyhow!(
                "Index file is too large: more than {max_size} bytes"
            ));
        }

        tracing::debug!(path = %self.path().display(), bytes = buffer.len(), "loaded index file");

        Ok(Bytes::from(buffer))
    }

    /// Load and decode the file
    pub fn decode(&self, max_size: u64, options: &DecodeOptions) -> anyhow::Result<DecodedIndex> {
        let bytes = self.load(max_size)?;

        if options.is_strict() && !has_index_signature(&bytes) {
            return Err(anyhow!(
                "Not a git index file: {}",
                self.path().display()
            ));
        }

        let index = decode_with(&bytes, options)
            .with_context(|| format!("Failed to decode {}", self.path().display()))?;

        Ok(index)
    }
}

use byteorder::{NetworkEndian, WriteBytesExt};
use derive_new::new;
use sha1::{Digest, Sha1};
use std::io::Write;

pub const FIXED_ENTRY_SIZE: usize = 62;

/// Metadata written for one entry; everything not listed is a fixed dummy value
#[derive(Debug, Clone, new)]
pub struct EntrySpec {
    pub name: String,
    pub mode: u32,
    pub oid: [u8; 20],
    pub stage: u8,
}

impl EntrySpec {
    pub fn file(name: &str) -> Self {
        EntrySpec::new(name.to_string(), 0o100644, oid_of(name), 0)
    }
}

#[derive(Debug, Clone)]
pub enum Trailer {
    None,
    Checksum,
    Extension([u8; 4], Vec<u8>),
    Raw(Vec<u8>),
}

/// Builds index files byte by byte, the way git lays them out
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    signature: [u8; 4],
    version: u32,
    declared_count: Option<u32>,
    entries: Vec<EntrySpec>,
    trailer: Trailer,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        IndexBuilder {
            signature: *b"DIRC",
            version: 2,
            declared_count: None,
            entries: Vec::new(),
            trailer: Trailer::Checksum,
        }
    }
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signature(mut self, signature: &[u8; 4]) -> Self {
        self.signature = *signature;
        self
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Override the entry count written in the header
    pub fn declared_count(mut self, count: u32) -> Self {
        self.declared_count = Some(count);
        self
    }

    pub fn entry(mut self, entry: EntrySpec) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn file(self, name: &str) -> Self {
        self.entry(EntrySpec::file(name))
    }

    pub fn trailer(mut self, trailer: Trailer) -> Self {
        self.trailer = trailer;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.write_all(&self.signature).unwrap();
        bytes.write_u32::<NetworkEndian>(self.version).unwrap();
        let count = self
            .declared_count
            .unwrap_or(self.entries.len() as u32);
        bytes.write_u32::<NetworkEndian>(count).unwrap();

        for entry in &self.entries {
            write_entry(&mut bytes, entry);
        }

        match &self.trailer {
            Trailer::None => {}
            Trailer::Checksum => {
                let checksum = Sha1::digest(&bytes);
                bytes.write_all(&checksum).unwrap();
            }
            Trailer::Extension(signature, body) => {
                bytes.write_all(signature).unwrap();
                bytes.write_u32::<NetworkEndian>(body.len() as u32).unwrap();
                bytes.write_all(body).unwrap();
            }
            Trailer::Raw(raw) => bytes.write_all(raw).unwrap(),
        }

        bytes
    }
}

fn write_entry(bytes: &mut Vec<u8>, entry: &EntrySpec) {
    let start = bytes.len();
    let fields = [
        1_700_000_000,
        0,
        1_700_000_000,
        0,
        2049,
        4242,
        entry.mode,
        1000,
        1000,
        entry.name.len() as u32,
    ];
    for field in fields {
        bytes.write_u32::<NetworkEndian>(field).unwrap();
    }
    bytes.write_all(&entry.oid).unwrap();

    let flags = (u16::from(entry.stage) << 12) | entry.name.len().min(0xFFF) as u16;
    bytes.write_u16::<NetworkEndian>(flags).unwrap();
    bytes.write_all(entry.name.as_bytes()).unwrap();

    bytes.push(0);
    while (bytes.len() - start) % 8 != 0 {
        bytes.push(0);
    }
}

pub fn oid_of(content: &str) -> [u8; 20] {
    let mut oid = [0u8; 20];
    oid.copy_from_slice(&Sha1::digest(content.as_bytes()));
    oid
}

pub fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

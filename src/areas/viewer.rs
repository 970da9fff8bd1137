use crate::areas::index::{DEFAULT_MAX_SIZE, IndexFile};
use crate::artifacts::index::{DecodeOptions, DecodedIndex};
use derive_new::new;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// How an index is decoded and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ViewSettings {
    /// Largest index file that will be loaded, in bytes
    pub max_size: u64,
    pub decode: DecodeOptions,
    /// Annotate entry timestamps with an RFC 3339 rendering
    pub human_time: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        ViewSettings {
            max_size: DEFAULT_MAX_SIZE,
            decode: DecodeOptions::default(),
            human_time: false,
        }
    }
}

/// Entry point for the commands: one index file and the writer to render it to
pub struct Viewer {
    writer: RefCell<Box<dyn std::io::Write>>,
    index_file: IndexFile,
    settings: ViewSettings,
}

impl Viewer {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>, settings: ViewSettings) -> Self {
        Viewer {
            writer: RefCell::new(writer),
            index_file: IndexFile::new(path.to_path_buf().into_boxed_path()),
            settings,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index_file(&self) -> &IndexFile {
        &self.index_file
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn load_index(&self) -> anyhow::Result<DecodedIndex> {
        self.index_file
            .decode(self.settings.max_size, &self.settings.decode)
    }
}

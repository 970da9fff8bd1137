use crate::areas::viewer::Viewer;
use crate::artifacts::index::header_advisories;
use crate::artifacts::index::index_header::IndexHeader;

impl Viewer {
    /// Print the header without decoding any entry
    pub fn header(&self) -> anyhow::Result<()> {
        let bytes = self.index_file().load(self.settings().max_size)?;
        let (header, _) = IndexHeader::decode(&bytes, self.settings().decode.is_strict())?;

        writeln!(self.writer(), "{header}")?;
        self.show_advisories(&header_advisories(&header))
    }
}

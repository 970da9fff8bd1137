use crate::areas::viewer::Viewer;

impl Viewer {
    /// List entry names in on-disk order
    ///
    /// With `stage`, each line is `<mode> <sha1> <stage>\t<name>`, the same shape
    /// as `git ls-files --stage`.
    pub fn ls_files(&self, stage: bool) -> anyhow::Result<()> {
        let index = self.load_index()?;

        for entry in index.entries() {
            if stage {
                writeln!(
                    self.writer(),
                    "{} {} {}\t{}",
                    entry.mode(),
                    entry.oid,
                    entry.stage(),
                    entry.name
                )?;
            } else {
                writeln!(self.writer(), "{}", entry.name)?;
            }
        }

        Ok(())
    }
}

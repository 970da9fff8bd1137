use crate::areas::viewer::Viewer;
use crate::artifacts::index::Advisory;
use colored::Colorize;

impl Viewer {
    pub fn show(&self) -> anyhow::Result<()> {
        let index = self.load_index()?;

        writeln!(self.writer(), "{}", index.header())?;
        writeln!(self.writer())?;

        for entry in index.entries() {
            writeln!(self.writer(), "{}", entry.name.as_str().bold())?;
            writeln!(
                self.writer(),
                "{}",
                entry.details(self.settings().human_time)
            )?;
            writeln!(self.writer())?;
        }

        writeln!(self.writer(), "{}", index.tail())?;
        self.show_advisories(index.advisories())
    }

    pub(crate) fn show_advisories(&self, advisories: &[Advisory]) -> anyhow::Result<()> {
        for advisory in advisories {
            writeln!(self.writer(), "{} {advisory}", "warning:".yellow())?;
        }

        Ok(())
    }
}

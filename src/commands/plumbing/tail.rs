use crate::areas::viewer::Viewer;

impl Viewer {
    pub fn tail(&self) -> anyhow::Result<()> {
        let index = self.load_index()?;

        writeln!(self.writer(), "{}", index.tail())?;
        self.show_advisories(index.advisories())
    }
}

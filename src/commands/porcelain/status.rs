use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Report staged entries and untracked workspace files
    pub fn status(&self) -> anyhow::Result<()> {
        let branch = self
            .refs()
            .current_branch()?
            .unwrap_or_else(|| "HEAD".to_string());

        writeln!(self.writer(), "On branch {branch}")?;
        writeln!(self.writer())?;

        let staged = self.index().entries();
        if !staged.is_empty() {
            writeln!(self.writer(), "Changes to be committed:")?;
            writeln!(self.writer())?;
            for entry in &staged {
                writeln!(self.writer(), "\tmodified: {}", entry.path)?;
            }
            writeln!(self.writer())?;
        }

        let untracked = self
            .workspace()
            .list_files()?
            .into_iter()
            .filter(|path| !self.index().has(&path.to_string_lossy()))
            .collect::<Vec<_>>();
        if !untracked.is_empty() {
            writeln!(self.writer(), "Untracked files:")?;
            writeln!(self.writer())?;
            for path in &untracked {
                writeln!(self.writer(), "\t{}", path.display())?;
            }
            writeln!(self.writer())?;
        }

        if staged.is_empty() && untracked.is_empty() {
            writeln!(self.writer(), "nothing to commit, working tree clean")?;
        }

        Ok(())
    }
}

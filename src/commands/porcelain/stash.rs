use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Capture the staged entries as a new stash and clear the index
    pub fn stash_push(&mut self, message: Option<&str>) -> anyhow::Result<()> {
        let branch = self
            .refs()
            .current_branch()?
            .unwrap_or_else(|| "HEAD".to_string());
        let message = message
            .map(|message| message.to_string())
            .unwrap_or_else(|| format!("WIP on {branch}"));

        let entries = self.index().entries();
        let pushed = self.stash_mut().push(message.clone(), entries, branch)?;

        if !pushed {
            writeln!(self.writer(), "No changes to stash")?;
            return Ok(());
        }

        let index = self.index_mut();
        index.clear();
        index.write_updates()?;

        writeln!(
            self.writer(),
            "Saved working directory and index state {message}"
        )?;

        Ok(())
    }

    pub fn stash_list(&self) -> anyhow::Result<()> {
        if self.stash().is_empty() {
            writeln!(self.writer(), "No stashes found")?;
            return Ok(());
        }

        for (position, entry) in self.stash().list().iter().enumerate() {
            writeln!(self.writer(), "stash@{{{position}}}: {}", entry.message)?;
        }

        Ok(())
    }

    /// Print the stashed paths in a diff-shaped summary
    pub fn stash_show(&self, stash_ref: &str) -> anyhow::Result<()> {
        let entry = self.stash().entry(stash_ref)?;

        writeln!(self.writer(), "diff --git a/stash b/stash")?;
        writeln!(self.writer(), "index {} files", entry.entries.len())?;
        writeln!(self.writer(), "--- a/stash")?;
        writeln!(self.writer(), "+++ b/stash")?;
        writeln!(self.writer(), "@@ -0,0 +1,{} @@", entry.entries.len())?;
        for staged in &entry.entries {
            writeln!(self.writer(), "+{}", staged.path)?;
        }

        Ok(())
    }

    /// Re-stage every entry from the stash into the live index
    ///
    /// There is no working-tree reconstruction; applying only restores the
    /// staged state. The stash entry is kept (apply is not pop).
    pub fn stash_apply(&mut self, stash_ref: &str) -> anyhow::Result<()> {
        let entries = self.stash().entry(stash_ref)?.entries.clone();

        let index = self.index_mut();
        for entry in entries {
            index.add(entry);
        }
        index.write_updates()?;

        writeln!(self.writer(), "Applied stash {stash_ref}")?;

        Ok(())
    }

    pub fn stash_drop(&mut self, stash_ref: &str) -> anyhow::Result<()> {
        let removed = self.stash_mut().drop_entry(stash_ref)?;

        writeln!(
            self.writer(),
            "Dropped stash {stash_ref} ({})",
            removed.message
        )?;

        Ok(())
    }
}

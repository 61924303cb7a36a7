use crate::areas::repository::Repository;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Walk the parent chain from HEAD and print each commit
    pub fn log(&self) -> anyhow::Result<()> {
        let mut current = self.refs().read_head()?;

        if current.is_none() {
            writeln!(self.writer(), "No commits yet")?;
            return Ok(());
        }

        while let Some(commit_id) = current {
            let commit = self.database().load_commit(&commit_id)?;

            writeln!(self.writer(), "{}", format!("commit {commit_id}").yellow())?;
            writeln!(self.writer(), "tree {}", commit.tree_oid())?;
            if let Some(parent) = commit.parent() {
                writeln!(self.writer(), "parent {parent}")?;
            }
            writeln!(self.writer())?;
            writeln!(self.writer(), "    {}", commit.message())?;
            writeln!(self.writer())?;

            current = commit.parent().cloned();
        }

        Ok(())
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::objects::tree::Tree;
use std::io::Write;

impl Repository {
    /// Record the staged snapshot as a new commit
    ///
    /// The parent is the resolved HEAD (`None` on an unborn branch makes a
    /// root commit). The new commit advances the current branch, or HEAD
    /// itself when detached. The index is left in place; commit does not
    /// clear it.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let parent = self.refs().read_head()?;

        let entries = self.index().entries();
        let tree = Tree::from_index(&entries);
        let tree_id = self.create_tree(&tree)?;

        let commit_id = self.create_commit(message, tree_id, parent)?;

        match self.refs().current_branch()? {
            Some(branch) => self.refs().set_branch_head(&branch, &commit_id)?,
            None => self.refs().set_head_commit(&commit_id)?,
        }

        writeln!(self.writer(), "[{}] {}", commit_id.to_short(), message.trim())?;
        writeln!(self.writer(), "  {} files changed", entries.len())?;

        Ok(())
    }
}

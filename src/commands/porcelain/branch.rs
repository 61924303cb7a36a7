use crate::areas::refs::BRANCH_REF_PREFIX;
use crate::areas::repository::Repository;
use crate::artifacts::objects::tree::Tree;
use crate::errors::JotError;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// List branches, marking the checked-out one
    pub fn branch_list(&self) -> anyhow::Result<()> {
        let current = self.refs().current_branch()?;

        for name in self.refs().list_branches()? {
            if current.as_deref() == Some(name.as_str()) {
                writeln!(self.writer(), "{}", format!("* {name}").green())?;
            } else {
                writeln!(self.writer(), "  {name}")?;
            }
        }

        Ok(())
    }

    /// Create a branch at the current HEAD (unborn when HEAD is unborn)
    pub fn branch_create(&self, name: &str) -> anyhow::Result<()> {
        let head = self.refs().read_head()?;
        self.refs().create_branch(name, head.as_ref())?;

        writeln!(self.writer(), "Created branch '{name}'")?;

        Ok(())
    }

    pub fn branch_checkout(&self, name: &str) -> anyhow::Result<()> {
        if !self.refs().branch_exists(name) {
            return Err(JotError::BranchNotFound(name.to_string()).into());
        }

        self.refs().set_head(&format!("{BRANCH_REF_PREFIX}{name}"))?;

        writeln!(self.writer(), "Switched to branch '{name}'")?;

        Ok(())
    }

    pub fn branch_delete(&self, name: &str) -> anyhow::Result<()> {
        if self.refs().current_branch()?.as_deref() == Some(name) {
            anyhow::bail!("cannot delete the branch you are currently on");
        }

        self.refs().delete_branch(name)?;

        writeln!(self.writer(), "Deleted branch '{name}'")?;

        Ok(())
    }

    /// Merge stub: records a merge commit without merging any content
    ///
    /// The commit's tree is a placeholder (an empty tree object) rather than
    /// a combination of the two branch trees, and the target branch tip is
    /// not recorded as a second parent. Real three-way merging is a future
    /// extension; this only moves the current branch forward.
    pub fn branch_merge(&self, name: &str) -> anyhow::Result<()> {
        if !self.refs().branch_exists(name) {
            return Err(JotError::BranchNotFound(name.to_string()).into());
        }

        let parent = self.refs().read_head()?;
        let placeholder_tree = self.create_tree(&Tree::new())?;
        let merge_id =
            self.create_commit(&format!("Merge branch '{name}'"), placeholder_tree, parent)?;

        match self.refs().current_branch()? {
            Some(branch) => self.refs().set_branch_head(&branch, &merge_id)?,
            None => self.refs().set_head_commit(&merge_id)?,
        }

        writeln!(self.writer(), "Merged branch '{name}'")?;

        Ok(())
    }

    /// Rebase stub: validates the target branch and changes nothing
    pub fn branch_rebase(&self, name: &str) -> anyhow::Result<()> {
        if !self.refs().branch_exists(name) {
            return Err(JotError::BranchNotFound(name.to_string()).into());
        }

        writeln!(self.writer(), "Rebase is not implemented yet")?;
        writeln!(
            self.writer(),
            "Would rebase the current branch onto '{name}'"
        )?;

        Ok(())
    }
}

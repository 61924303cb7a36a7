use crate::areas::refs::BRANCH_REF_PREFIX;
use crate::areas::repository::{DEFAULT_BRANCH, Repository};
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    pub fn init(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create the objects directory")?;
        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create the refs/heads directory")?;

        self.refs()
            .set_head(&format!("{BRANCH_REF_PREFIX}{DEFAULT_BRANCH}"))
            .context("Failed to create the initial HEAD reference")?;
        self.refs()
            .create_branch(DEFAULT_BRANCH, None)
            .context("Failed to create the default branch")?;

        self.index()
            .write_updates()
            .context("Failed to create the index file")?;

        writeln!(
            self.writer(),
            "Initialized empty jot repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::errors::JotError;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Stage a file: write its blob and upsert the index entry
    pub fn add(&mut self, file: &str) -> anyhow::Result<()> {
        let file_path = Path::new(file);
        if !file_path.is_file() {
            return Err(JotError::FileNotFound(file.to_string()).into());
        }

        let absolute_path = file_path.canonicalize()?;
        let relative_path = self.workspace().relativize(&absolute_path)?;

        let content = self.workspace().read_file(&relative_path)?;
        let blob_id = self.create_blob(content)?;
        let (mode, size) = self.workspace().stat_file(&relative_path)?;

        let entry = IndexEntry::new(
            relative_path.to_string_lossy().to_string(),
            blob_id.to_string(),
            mode,
            size,
        );

        let index = self.index_mut();
        index.add(entry);
        index.write_updates()?;

        writeln!(
            self.writer(),
            "Added '{}' to staging area",
            relative_path.display()
        )?;

        Ok(())
    }
}

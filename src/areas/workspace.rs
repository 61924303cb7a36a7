//! Working directory file system operations

use crate::errors::JotError;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use is_executable::IsExecutable;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory names never considered part of the workspace
const IGNORED_DIRS: [&str; 3] = ["target", "build", "node_modules"];

pub const EXECUTABLE_MODE: &str = "100755";
pub const REGULAR_MODE: &str = "100644";

#[derive(Debug, new)]
pub struct Workspace {
    /// Path to the repository root
    path: Box<Path>,
}

impl Workspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let absolute_path = self.path.join(file_path);

        if !absolute_path.is_file() {
            return Err(JotError::FileNotFound(file_path.display().to_string()).into());
        }

        let content = std::fs::read(&absolute_path)
            .context(format!("failed to read file {}", absolute_path.display()))?;

        Ok(Bytes::from(content))
    }

    /// File mode and size as staged in the index
    pub fn stat_file(&self, file_path: &Path) -> anyhow::Result<(String, u64)> {
        let absolute_path = self.path.join(file_path);

        let metadata = std::fs::metadata(&absolute_path)
            .context(format!("failed to stat file {}", absolute_path.display()))?;
        let mode = if absolute_path.is_executable() {
            EXECUTABLE_MODE
        } else {
            REGULAR_MODE
        };

        Ok((mode.to_string(), metadata.len()))
    }

    /// Path of a file relative to the repository root
    pub fn relativize(&self, file_path: &Path) -> anyhow::Result<PathBuf> {
        file_path
            .strip_prefix(self.path.as_ref())
            .map(PathBuf::from)
            .context(format!(
                "path {} is outside the repository at {}",
                file_path.display(),
                self.path.display()
            ))
    }

    /// All regular files under the root that are not ignored, relative to
    /// the root and sorted by name
    ///
    /// Dotted components (which covers the metadata directory) and common
    /// build output directories are skipped.
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = WalkDir::new(self.path.as_ref())
            .into_iter()
            .filter_entry(|entry| {
                entry.path() == self.path.as_ref() || !Self::is_ignored(entry.path())
            })
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| self.relativize(entry.path()).ok())
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    fn is_ignored(path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();

        name.starts_with('.') || IGNORED_DIRS.contains(&name.as_ref())
    }
}

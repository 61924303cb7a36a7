#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

pub fn run_jot_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("jot").expect("Failed to find jot binary");
    cmd.current_dir(dir);
    cmd.args(args);
    cmd
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", path, e));

    path
}

pub fn meta_path(dir: &Path) -> PathBuf {
    dir.join(jot::areas::repository::META_DIR)
}

/// Reload the persisted index snapshot of the repository at `dir`
pub fn read_index(dir: &Path) -> jot::areas::index::Index {
    let mut index = jot::areas::index::Index::new(meta_path(dir).join("index").into_boxed_path());
    index.rehydrate().expect("Failed to load index snapshot");
    index
}

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// A repository with one staged and committed file (`f.txt`, content "hi")
#[fixture]
pub fn committed_repository_dir(init_repository_dir: TempDir) -> TempDir {
    write_file(init_repository_dir.path(), "f.txt", "hi");

    run_jot_command(init_repository_dir.path(), &["add", "f.txt"])
        .assert()
        .success();
    run_jot_command(init_repository_dir.path(), &["commit", "-m", "first"])
        .assert()
        .success();

    init_repository_dir
}

use assert_fs::TempDir;
use bytes::Bytes;
use jot::artifacts::objects::object::GitObject;
use jot::artifacts::objects::object_type::ObjectType;
use predicates::prelude::*;
use rstest::rstest;

mod common;
use common::{init_repository_dir, meta_path, read_index, run_jot_command, write_file};

#[rstest]
fn staged_file_is_content_addressed(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    write_file(dir.path(), "f.txt", "hi");

    run_jot_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'f.txt' to staging area"));

    // the staged hash is the SHA-256 of the header-prefixed encoding
    let blob = GitObject::new(ObjectType::Blob, Bytes::from_static(b"hi"));
    assert_eq!(blob.encode().as_ref(), b"blob 2\0hi");
    let expected = blob.object_id();

    let index = read_index(dir.path());
    let entry = index.entry("f.txt").expect("f.txt should be staged");
    assert_eq!(entry.hash, expected.to_string());
    assert_eq!(entry.mode, "100644");
    assert_eq!(entry.size, 2);

    // the blob itself landed under the sharded object path
    let object_path = meta_path(dir.path())
        .join("objects")
        .join(expected.to_path());
    assert_eq!(std::fs::read(object_path)?, b"blob 2\0hi");

    Ok(())
}

#[rstest]
fn re_adding_a_path_replaces_the_entry(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    write_file(dir.path(), "f.txt", "hi");
    run_jot_command(dir.path(), &["add", "f.txt"]).assert().success();
    let first = read_index(dir.path()).entry("f.txt").unwrap().hash.clone();

    write_file(dir.path(), "f.txt", "hello");
    run_jot_command(dir.path(), &["add", "f.txt"]).assert().success();

    let index = read_index(dir.path());
    assert_eq!(index.len(), 1);
    let entry = index.entry("f.txt").unwrap();
    assert_ne!(entry.hash, first);
    assert_eq!(entry.size, 5);

    Ok(())
}

#[rstest]
fn adding_a_nested_file_stages_its_relative_path(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    write_file(dir.path(), "a/b/nested.txt", "deep");

    run_jot_command(dir.path(), &["add", "a/b/nested.txt"])
        .assert()
        .success();

    let index = read_index(dir.path());
    assert!(index.has("a/b/nested.txt"));

    Ok(())
}

#[rstest]
fn adding_a_missing_file_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_jot_command(init_repository_dir.path(), &["add", "ghost.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found: ghost.txt"));

    Ok(())
}

use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

mod common;
use common::{init_repository_dir, read_index, run_jot_command, write_file};

/// Stage a file and stash it under the given message
fn stage_and_stash(dir: &std::path::Path, file: &str, message: &str) {
    write_file(dir, file, "content");
    run_jot_command(dir, &["add", file]).assert().success();
    run_jot_command(dir, &["stash", "push", "-m", message])
        .assert()
        .success();
}

#[rstest]
fn pushing_an_empty_index_is_a_no_op(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_jot_command(init_repository_dir.path(), &["stash", "push"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes to stash"));

    run_jot_command(init_repository_dir.path(), &["stash", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No stashes found"));

    Ok(())
}

#[rstest]
fn push_captures_the_index_and_clears_it(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    write_file(dir.path(), "f.txt", "hi");
    run_jot_command(dir.path(), &["add", "f.txt"]).assert().success();

    run_jot_command(dir.path(), &["stash", "push"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Saved working directory and index state WIP on main",
        ));

    assert!(read_index(dir.path()).is_empty());

    Ok(())
}

#[rstest]
fn stashes_list_newest_first(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    stage_and_stash(dir.path(), "1.txt", "a");
    stage_and_stash(dir.path(), "2.txt", "b");
    stage_and_stash(dir.path(), "3.txt", "c");

    run_jot_command(dir.path(), &["stash", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stash@{0}: c"))
        .stdout(predicate::str::contains("stash@{1}: b"))
        .stdout(predicate::str::contains("stash@{2}: a"));

    Ok(())
}

#[rstest]
fn dropping_reindexes_the_remaining_stashes(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    stage_and_stash(dir.path(), "1.txt", "a");
    stage_and_stash(dir.path(), "2.txt", "b");
    stage_and_stash(dir.path(), "3.txt", "c");

    run_jot_command(dir.path(), &["stash", "drop", "stash@{1}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dropped stash stash@{1} (b)"));

    // the former stash@{2} is now addressable as stash@{1}
    run_jot_command(dir.path(), &["stash", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stash@{0}: c"))
        .stdout(predicate::str::contains("stash@{1}: a"));

    Ok(())
}

#[rstest]
fn apply_restages_the_captured_entries(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    stage_and_stash(dir.path(), "f.txt", "wip");
    assert!(read_index(dir.path()).is_empty());

    run_jot_command(dir.path(), &["stash", "apply"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied stash stash@{0}"));

    let index = read_index(dir.path());
    assert!(index.has("f.txt"));

    // apply keeps the stash entry around
    run_jot_command(dir.path(), &["stash", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stash@{0}: wip"));

    Ok(())
}

#[rstest]
fn show_prints_the_stashed_paths(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    stage_and_stash(dir.path(), "f.txt", "wip");

    run_jot_command(dir.path(), &["stash", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("diff --git a/stash b/stash"))
        .stdout(predicate::str::contains("+f.txt"));

    Ok(())
}

#[rstest]
fn bare_stash_reports_the_missing_subcommand(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_jot_command(init_repository_dir.path(), &["stash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No stash subcommand was used"));

    Ok(())
}

#[rstest]
fn bad_stash_references_are_not_found(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    stage_and_stash(dir.path(), "f.txt", "wip");

    run_jot_command(dir.path(), &["stash", "show", "stash@{9}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stash not found: stash@{9}"));

    run_jot_command(dir.path(), &["stash", "drop", "nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stash not found: nonsense"));

    Ok(())
}

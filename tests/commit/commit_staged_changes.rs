use crate::common::command::{
    get_head_commit_sha, gitlet_commit, gitlet_stdout, init_repository_dir, read_ref,
    repository_dir, run_gitlet_command, staged_names,
};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

fn lines_with_prefix(output: &str, prefix: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.strip_prefix(prefix))
        .map(str::to_string)
        .collect()
}

fn cat_commit(dir: &Path, oid: &str) -> String {
    gitlet_stdout(dir, &["cat-file", oid])
}

#[rstest]
fn write_commit_for_nested_project(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_gitlet_command(dir, &["init"]).assert().success();
    let root = get_head_commit_sha(dir);

    for (name, content) in [("1.txt", "one"), ("a/2.txt", "two"), ("a/b/3.txt", "three")] {
        std::fs::create_dir_all(dir.join(name).parent().unwrap())?;
        std::fs::write(dir.join(name), content)?;
        run_gitlet_command(dir, &["add", name]).assert().success();
    }

    let output = gitlet_commit(dir, "Initial files").assert().success();
    let head = get_head_commit_sha(dir);
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    assert_eq!(stdout, format!("[master {}] Initial files\n", &head[..7]));

    assert_ne!(head, root);
    assert_eq!(read_ref(dir, "master"), head);

    let commit = cat_commit(dir, &head);
    assert_eq!(lines_with_prefix(&commit, "parent "), vec![root]);
    assert_eq!(lines_with_prefix(&commit, "blob ").len(), 3);
    assert!(commit.contains("timestamp 1672574400 +0000\n"));
    assert!(commit.ends_with("\n\nInitial files\n"));

    let blob_count = std::fs::read_dir(dir.join(".gitlet/blobs"))?.count();
    assert_eq!(blob_count, 3);
    assert!(staged_names(dir, "add-stage").is_empty());

    Ok(())
}

#[rstest]
fn recommitting_unchanged_content_records_no_new_blob(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let previous = get_head_commit_sha(dir);

    run_gitlet_command(dir, &["add", "1.txt"]).assert().success();
    gitlet_commit(dir, "Nothing new").assert().success();

    let head = get_head_commit_sha(dir);
    let commit = cat_commit(dir, &head);
    assert_eq!(lines_with_prefix(&commit, "parent "), vec![previous]);
    assert!(lines_with_prefix(&commit, "blob ").is_empty());
    assert_eq!(std::fs::read_dir(dir.join(".gitlet/blobs"))?.count(), 3);

    Ok(())
}

#[rstest]
fn same_content_under_two_names_is_two_blobs(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_gitlet_command(dir, &["init"]).assert().success();
    std::fs::write(dir.join("left.txt"), "same")?;
    std::fs::write(dir.join("right.txt"), "same")?;
    run_gitlet_command(dir, &["add", "left.txt"]).assert().success();
    run_gitlet_command(dir, &["add", "right.txt"]).assert().success();

    gitlet_commit(dir, "Twins").assert().success();

    let commit = cat_commit(dir, &get_head_commit_sha(dir));
    assert_eq!(lines_with_prefix(&commit, "blob ").len(), 2);

    Ok(())
}

#[rstest]
fn commit_records_and_clears_staged_removals(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("4.txt"), "four")?;
    run_gitlet_command(dir, &["add", "4.txt"]).assert().success();
    run_gitlet_command(dir, &["rm", "a/2.txt"]).assert().success();

    gitlet_commit(dir, "Swap files").assert().success();

    let commit = cat_commit(dir, &get_head_commit_sha(dir));
    assert_eq!(lines_with_prefix(&commit, "removed "), vec!["a/2.txt"]);
    assert_eq!(lines_with_prefix(&commit, "blob ").len(), 1);
    assert!(staged_names(dir, "add-stage").is_empty());
    assert!(staged_names(dir, "rm-stage").is_empty());

    Ok(())
}

#[rstest]
fn commit_accepts_a_positional_message(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("4.txt"), "four").unwrap();
    run_gitlet_command(dir, &["add", "4.txt"]).assert().success();

    run_gitlet_command(dir, &["commit", "Add four"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("] Add four\n"));
}

#[rstest]
fn commit_moves_only_the_current_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "dev"]).assert().success();
    let before = get_head_commit_sha(dir);
    std::fs::write(dir.join("4.txt"), "four").unwrap();
    run_gitlet_command(dir, &["add", "4.txt"]).assert().success();

    gitlet_commit(dir, "Add four").assert().success();

    assert_eq!(read_ref(dir, "master"), get_head_commit_sha(dir));
    assert_eq!(read_ref(dir, "dev"), before);
}

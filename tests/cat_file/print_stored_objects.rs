use crate::common::command::{get_head_commit_sha, gitlet_stdout, init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_blob_content(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let commit = gitlet_stdout(dir, &["cat-file", &get_head_commit_sha(dir)]);

    let mut contents = commit
        .lines()
        .filter_map(|line| line.strip_prefix("blob "))
        .map(|oid| gitlet_stdout(dir, &["cat-file", oid]))
        .collect::<Vec<_>>();
    contents.sort();

    assert_eq!(contents, vec!["one\n", "three\n", "two\n"]);
}

#[rstest]
fn print_root_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let root = gitlet_stdout(dir, &["find", "initial commit"]);

    let commit = gitlet_stdout(dir, &["cat-file", root.trim()]);

    assert_eq!(commit, "timestamp 0 +0000\n\ninitial commit\n");
}

#[rstest]
#[case("0123456789abcdef0123456789abcdef01234567")]
#[case("not-an-id")]
fn unknown_objects_are_reported(init_repository_dir: TempDir, #[case] oid: &str) {
    run_gitlet_command(init_repository_dir.path(), &["cat-file", oid])
        .assert()
        .success()
        .stdout(format!("No object with id {oid} exists.\n"));
}

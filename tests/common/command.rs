use crate::common::COMMIT_DATE;
use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository holding one commit ("Initial files") with `1.txt`, `a/2.txt` and `a/b/3.txt`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let files = [
        ("1.txt", "one"),
        ("a/2.txt", "two"),
        ("a/b/3.txt", "three"),
    ];
    for (name, content) in files {
        write_file(FileSpec::new(
            repository_dir.path().join(name),
            content.to_string(),
        ));
        run_gitlet_command(repository_dir.path(), &["add", name])
            .assert()
            .success();
    }

    gitlet_commit(repository_dir.path(), "Initial files")
        .assert()
        .success();

    repository_dir
}

/// A repository with four commits on `master`, each adding `file<n>.txt`
#[fixture]
pub fn repository_with_multiple_commits(repository_dir: TempDir) -> TempDir {
    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    for (index, message) in ["First commit", "Second commit", "Third commit", "Fourth commit"]
        .into_iter()
        .enumerate()
    {
        let name = format!("file{}.txt", index + 1);
        write_file(FileSpec::new(
            repository_dir.path().join(&name),
            format!("content {}", index + 1),
        ));
        run_gitlet_command(repository_dir.path(), &["add", &name])
            .assert()
            .success();
        gitlet_commit(repository_dir.path(), message)
            .assert()
            .success();
    }

    repository_dir
}

pub fn run_gitlet_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitlet").expect("Failed to find gitlet binary");
    cmd.env_remove("GITLET_DEFAULT_BRANCH");
    cmd.env_remove("GITLET_LOG");
    cmd.env("GITLET_COMMIT_DATE", COMMIT_DATE);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn gitlet_commit(dir: &Path, message: &str) -> Command {
    run_gitlet_command(dir, &["commit", "-m", message])
}

/// Run a command that must succeed and return its stdout
pub fn gitlet_stdout(dir: &Path, args: &[&str]) -> String {
    let output = run_gitlet_command(dir, args).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is not UTF-8")
}

pub fn read_ref(dir: &Path, name: &str) -> String {
    let ref_path = dir.join(".gitlet").join("refs").join(name);
    std::fs::read_to_string(&ref_path)
        .unwrap_or_else(|e| panic!("Failed to read ref {:?}: {}", ref_path, e))
        .trim()
        .to_string()
}

/// Get the current HEAD commit SHA
pub fn get_head_commit_sha(dir: &Path) -> String {
    read_ref(dir, "HEAD")
}

/// Commit ids printed by `log` or `global-log`, in output order
pub fn logged_commit_ids(log_output: &str) -> Vec<String> {
    log_output
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .map(str::to_string)
        .collect()
}

/// Names of the files stored under a staging area directory (`add-stage` or `rm-stage`)
pub fn staged_names(dir: &Path, area: &str) -> Vec<String> {
    let area_path = dir.join(".gitlet").join(area);
    let mut names = walkdir::WalkDir::new(&area_path)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(&area_path)
                .expect("staged entry outside its area")
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect::<Vec<_>>();
    names.sort();
    names
}

use crate::common::command::{
    init_repository_dir, repository_dir, run_gitlet_command, staged_names,
};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_files_from_nested_directories(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let nested = FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    );
    write_file(nested.clone());
    let generated = write_generated_files(repository_dir.path(), 3);

    run_gitlet_command(repository_dir.path(), &["add", "a/b/3.txt"])
        .assert()
        .success()
        .stdout("");
    for file in &generated {
        run_gitlet_command(repository_dir.path(), &["add", &file.name_in(repository_dir.path())])
            .assert()
            .success();
    }

    let mut expected = generated
        .iter()
        .map(|file| file.name_in(repository_dir.path()))
        .chain(std::iter::once("a/b/3.txt".to_string()))
        .collect::<Vec<_>>();
    expected.sort();
    assert_eq!(staged_names(repository_dir.path(), "add-stage"), expected);

    let staged = std::fs::read_to_string(repository_dir.path().join(".gitlet/add-stage/a/b/3.txt"))?;
    assert_eq!(staged, nested.content);

    Ok(())
}

#[rstest]
fn adding_again_replaces_the_staged_content(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    let file = repository_dir.path().join("notes.txt");

    std::fs::write(&file, "draft")?;
    run_gitlet_command(repository_dir.path(), &["add", "notes.txt"])
        .assert()
        .success();
    std::fs::write(&file, "final")?;
    run_gitlet_command(repository_dir.path(), &["add", "./notes.txt"])
        .assert()
        .success();

    let staged = std::fs::read_to_string(repository_dir.path().join(".gitlet/add-stage/notes.txt"))?;
    assert_eq!(staged, "final");
    assert_eq!(staged_names(repository_dir.path(), "add-stage"), vec!["notes.txt"]);

    Ok(())
}

#[rstest]
fn adding_a_missing_file_stages_nothing(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["add", "ghost.txt"])
        .assert()
        .success()
        .stdout("File does not exist.\n");

    assert!(staged_names(init_repository_dir.path(), "add-stage").is_empty());
}

#[rstest]
#[case("../outside.txt")]
#[case(".gitlet/refs/HEAD")]
fn adding_a_path_outside_the_working_tree_is_rejected(
    init_repository_dir: TempDir,
    #[case] path: &str,
) {
    run_gitlet_command(init_repository_dir.path(), &["add", path])
        .assert()
        .success()
        .stdout(format!("Invalid file path: {path}\n"));

    assert!(staged_names(init_repository_dir.path(), "add-stage").is_empty());
}

#[rstest]
fn adding_a_file_where_a_staged_file_used_to_be(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("x"), "file").unwrap();
    run_gitlet_command(dir, &["add", "x"]).assert().success();

    std::fs::remove_file(dir.join("x")).unwrap();
    std::fs::create_dir_all(dir.join("x")).unwrap();
    std::fs::write(dir.join("x/y.txt"), "nested").unwrap();

    run_gitlet_command(dir, &["add", "x/y.txt"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(staged_names(dir, "add-stage"), vec!["x/y.txt"]);
}

use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_grove_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// An initialized repository with a small nested project:
///
/// ```text
/// 1.txt
/// a/2.txt
/// a/b/3.txt
/// c/4.txt
/// ```
#[fixture]
pub fn nested_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let root = init_repository_dir.path();

    write_file(FileSpec::new(root.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(root.join("a").join("2.txt"), "two".to_string()));
    write_file(FileSpec::new(
        root.join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));
    write_file(FileSpec::new(root.join("c").join("4.txt"), "four".to_string()));

    init_repository_dir
}

pub fn run_grove_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("grove").expect("Failed to find grove binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn grove_commit_tree(dir: &Path, tree: &str, parent: Option<&str>, message: &str) -> Command {
    let mut cmd = run_grove_command(dir, &["commit-tree", tree, "-m", message]);
    if let Some(parent) = parent {
        cmd.args(["-p", parent]);
    }
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", "fake_user"),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
        ("GIT_AUTHOR_DATE", "2023-01-01 12:00:00 +0000"), // %Y-%m-%d %H:%M:%S %z
    ]);
    cmd.env_remove("GIT_COMMITTER_NAME")
        .env_remove("GIT_COMMITTER_EMAIL")
        .env_remove("GIT_COMMITTER_DATE");
    cmd
}

pub fn write_tree(dir: &Path) -> String {
    crate::common::stdout_of(run_grove_command(dir, &["write-tree"]).assert().success())
}

use crate::common::command::{
    grove_commit_tree, nested_repository_dir, run_grove_command, write_tree,
};
use crate::common::file::{FileSpec, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

const ROOT_COMMIT_ID: &str = "a556757e7b8838cceb9c44e5cbf2f1a5a2c296b4";

fn cat_commit(dir: &std::path::Path, oid: &str) -> String {
    stdout_of(
        run_grove_command(dir, &["cat-file", "-p", oid])
            .assert()
            .success(),
    )
}

#[rstest]
fn root_commit_has_no_parent_line(nested_repository_dir: TempDir) {
    let tree_id = write_tree(nested_repository_dir.path());

    let commit_id = stdout_of(
        grove_commit_tree(nested_repository_dir.path(), &tree_id, None, "initial")
            .assert()
            .success(),
    );
    assert_eq!(commit_id, ROOT_COMMIT_ID);

    let content = cat_commit(nested_repository_dir.path(), &commit_id);
    let expected = format!(
        "tree {tree_id}\n\
         author fake_user <fake_email@email.com> 1672574400 +0000\n\
         committer fake_user <fake_email@email.com> 1672574400 +0000\n\
         \n\
         initial"
    );
    assert_eq!(content, expected);

    run_grove_command(nested_repository_dir.path(), &["cat-file", "-t", &commit_id])
        .assert()
        .success()
        .stdout("commit\n");
}

#[rstest]
fn commit_with_parent_records_one_parent_line(nested_repository_dir: TempDir) {
    let tree_id = write_tree(nested_repository_dir.path());
    let first = stdout_of(
        grove_commit_tree(nested_repository_dir.path(), &tree_id, None, "initial")
            .assert()
            .success(),
    );

    write_file(FileSpec::new(
        nested_repository_dir.path().join("c").join("4.txt"),
        "FOUR".to_string(),
    ));
    let second_tree_id = write_tree(nested_repository_dir.path());
    let second = stdout_of(
        grove_commit_tree(
            nested_repository_dir.path(),
            &second_tree_id,
            Some(&first),
            "second",
        )
        .assert()
        .success(),
    );
    assert_eq!(second, "19285112e29ff5ea0e9d433c8f66aba2ec4e3e35");

    let content = cat_commit(nested_repository_dir.path(), &second);
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], format!("tree {second_tree_id}"));
    assert_eq!(lines[1], format!("parent {first}"));
    assert_eq!(lines.iter().filter(|l| l.starts_with("parent ")).count(), 1);
}

#[rstest]
fn committer_env_overrides_author(nested_repository_dir: TempDir) {
    let tree_id = write_tree(nested_repository_dir.path());

    let commit_id = stdout_of(
        grove_commit_tree(nested_repository_dir.path(), &tree_id, None, "initial\n")
            .env("GIT_COMMITTER_NAME", "other_user")
            .env("GIT_COMMITTER_EMAIL", "other@email.com")
            .env("GIT_COMMITTER_DATE", "1672574460 +0200")
            .assert()
            .success(),
    );

    let content = cat_commit(nested_repository_dir.path(), &commit_id);
    assert!(content.contains("author fake_user <fake_email@email.com> 1672574400 +0000\n"));
    assert!(content.contains("committer other_user <other@email.com> 1672574460 +0200\n"));
}

#[rstest]
fn identity_names_from_env_are_trimmed(nested_repository_dir: TempDir) {
    let tree_id = write_tree(nested_repository_dir.path());

    let commit_id = stdout_of(
        grove_commit_tree(nested_repository_dir.path(), &tree_id, None, "initial")
            .env("GIT_AUTHOR_NAME", "  fake_user  ")
            .env("GIT_COMMITTER_NAME", " other_user ")
            .assert()
            .success(),
    );

    let content = cat_commit(nested_repository_dir.path(), &commit_id);
    assert!(content.contains("author fake_user <fake_email@email.com> 1672574400 +0000\n"));
    assert!(content.contains("committer other_user <fake_email@email.com> 1672574400 +0000\n"));
}

#[rstest]
fn ls_tree_accepts_commit(nested_repository_dir: TempDir) {
    let tree_id = write_tree(nested_repository_dir.path());
    let commit_id = stdout_of(
        grove_commit_tree(nested_repository_dir.path(), &tree_id, None, "initial")
            .assert()
            .success(),
    );

    run_grove_command(nested_repository_dir.path(), &["ls-tree", "--name-only", &commit_id])
        .assert()
        .success()
        .stdout("1.txt\na\nc\n");
}

#[rstest]
fn commit_tree_requires_author_identity(nested_repository_dir: TempDir) {
    let tree_id = write_tree(nested_repository_dir.path());

    grove_commit_tree(nested_repository_dir.path(), &tree_id, None, "initial")
        .env_remove("GIT_AUTHOR_NAME")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GIT_AUTHOR_NAME not set"));
}

#[rstest]
fn commit_tree_rejects_identity_with_angle_brackets(nested_repository_dir: TempDir) {
    let tree_id = write_tree(nested_repository_dir.path());

    grove_commit_tree(nested_repository_dir.path(), &tree_id, None, "initial")
        .env("GIT_AUTHOR_NAME", "fake <user>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid identity"));
}

#[rstest]
fn parent_must_be_a_commit(nested_repository_dir: TempDir) {
    let tree_id = write_tree(nested_repository_dir.path());

    grove_commit_tree(nested_repository_dir.path(), &tree_id, Some(&tree_id), "initial")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a commit"));
}

#[rstest]
fn tree_must_exist(nested_repository_dir: TempDir) {
    grove_commit_tree(
        nested_repository_dir.path(),
        "4b825dc642cb6eb9a060e54bf8d69288fbee4904",
        None,
        "initial",
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("Object not found"));
}

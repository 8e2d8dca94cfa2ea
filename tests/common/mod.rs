#![allow(dead_code)]

pub mod command;
pub mod file;

/// Path of a loose object file inside a work tree
pub fn object_path(dir: &std::path::Path, oid: &str) -> std::path::PathBuf {
    dir.join(".git").join("objects").join(&oid[..2]).join(&oid[2..])
}

/// Trimmed stdout of a successful command
pub fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone())
        .expect("stdout is not valid UTF-8")
        .trim_end()
        .to_string()
}

use anyhow::Context;
use bytes::Bytes;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [".git", ".", ".."];

/// A single directory entry the object store knows how to record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceEntry {
    File { name: OsString, path: PathBuf },
    Directory { name: OsString, path: PathBuf },
}

/// The working directory: the filesystem side of `write-tree`
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    fn is_ignored(name: &OsStr) -> bool {
        IGNORED_PATHS.iter().any(|ignored| name == *ignored)
    }

    /// List one directory level, sorted by name
    ///
    /// `dir_path` is relative to the workspace root. Symlinks and other
    /// special files are skipped, as is the `.git` directory.
    pub fn list_dir(&self, dir_path: &Path) -> anyhow::Result<Vec<WorkspaceEntry>> {
        let root = self.path.join(dir_path);

        let mut entries = Vec::new();
        for entry in WalkDir::new(&root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.with_context(|| format!("Unable to list directory {}", root.display()))?;

            let name = entry.file_name();
            if Self::is_ignored(name) {
                continue;
            }

            let name = name.to_os_string();
            let path = dir_path.join(&name);
            let file_type = entry.file_type();

            if file_type.is_dir() {
                entries.push(WorkspaceEntry::Directory { name, path });
            } else if file_type.is_file() {
                entries.push(WorkspaceEntry::File { name, path });
            } else {
                tracing::debug!(path = %entry.path().display(), "skipping special file");
            }
        }

        Ok(entries)
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(file_path);

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Unable to read file {}", file_path.display()))?;

        Ok(content.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_dir_sorts_and_skips_git_dir() {
        let dir = TempDir::new().unwrap();
        dir.child("b.txt").write_str("b").unwrap();
        dir.child("a").create_dir_all().unwrap();
        dir.child(".git/HEAD").write_str("ref: refs/heads/master\n").unwrap();

        let workspace = Workspace::new(dir.path().to_path_buf().into_boxed_path());
        let entries = workspace.list_dir(Path::new("")).unwrap();

        assert_eq!(
            entries,
            vec![
                WorkspaceEntry::Directory {
                    name: "a".into(),
                    path: PathBuf::from("a")
                },
                WorkspaceEntry::File {
                    name: "b.txt".into(),
                    path: PathBuf::from("b.txt")
                },
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_list_dir_keeps_non_utf8_names() {
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let name = OsStr::from_bytes(b"caf\xe9.txt");
        std::fs::write(dir.path().join(name), "bytes").unwrap();

        let workspace = Workspace::new(dir.path().to_path_buf().into_boxed_path());
        let entries = workspace.list_dir(Path::new("")).unwrap();

        assert_eq!(
            entries,
            vec![WorkspaceEntry::File {
                name: name.to_os_string(),
                path: PathBuf::from(name)
            }]
        );
    }

    #[test]
    fn test_read_file_returns_raw_bytes() {
        let dir = TempDir::new().unwrap();
        dir.child("bin").write_binary(&[0, 159, 146, 150]).unwrap();

        let workspace = Workspace::new(dir.path().to_path_buf().into_boxed_path());
        assert_eq!(
            workspace.read_file(Path::new("bin")).unwrap().as_ref(),
            &[0, 159, 146, 150]
        );
    }
}

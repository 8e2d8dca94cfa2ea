use crate::areas::repository::Repository;
use crate::errors::ObjectError;
use anyhow::Context;
use std::fs;
use std::io::Write;

const DEFAULT_BRANCH: &str = "master";

impl Repository {
    /// Create the store: `objects/`, an empty `refs/` and a symbolic `HEAD`
    ///
    /// An existing store root is never reused or overwritten.
    pub fn init(&mut self) -> anyhow::Result<()> {
        let git_path = self.git_path();
        if git_path.exists() {
            return Err(ObjectError::AlreadyInitialized(git_path.into()).into());
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .git/objects directory")?;

        fs::create_dir_all(self.refs().refs_path())
            .context("Failed to create .git/refs directory")?;

        self.refs()
            .set_head_symbolic(DEFAULT_BRANCH)
            .context("Failed to create initial HEAD reference")?;

        tracing::info!(path = %git_path.display(), "repository initialized");
        writeln!(
            self.writer(),
            "Initialized empty Grove repository in {}",
            git_path.display()
        )?;

        Ok(())
    }
}

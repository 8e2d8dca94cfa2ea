//! References
//!
//! Only the initial symbolic `HEAD` reference is managed here. It names the
//! default branch, which does not exist until something writes it.
//!
//! ## File Format
//!
//! `HEAD` is a text file containing `ref: refs/heads/<branch>\n`.

use crate::errors::Result;
use derive_new::new;
use std::path::Path;

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Prefix marking a symbolic reference
const SYMREF_PREFIX: &str = "ref: ";

/// Reference manager for a store root (typically `.git`)
#[derive(Debug, new)]
pub struct Refs {
    path: Box<Path>,
}

impl Refs {
    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    /// Point `HEAD` at `refs/heads/<branch>`
    pub fn set_head_symbolic(&self, branch: &str) -> Result<()> {
        let content = format!("{SYMREF_PREFIX}refs/heads/{branch}\n");
        std::fs::write(self.head_path(), content)?;

        tracing::debug!(branch, "HEAD updated");
        Ok(())
    }
}

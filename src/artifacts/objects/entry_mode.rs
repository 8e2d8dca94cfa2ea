//! Tree entry modes
//!
//! Only two modes are recognised: regular files and directories. Anything
//! else found in a tree is rejected instead of being passed through.

use crate::errors::{ObjectError, Result};

#[derive(Debug, Clone, Copy, Eq, Ord, Default, PartialEq, PartialOrd, Hash)]
pub enum EntryMode {
    #[default]
    Regular,
    Directory,
}

impl EntryMode {
    /// Mode text as written into tree objects
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryMode::Regular => "100644",
            EntryMode::Directory => "40000",
        }
    }

    pub fn as_u32(&self) -> u32 {
        match self {
            EntryMode::Regular => 0o100644,
            EntryMode::Directory => 0o40000,
        }
    }

    pub fn is_tree(&self) -> bool {
        matches!(self, EntryMode::Directory)
    }

    /// Parse the ASCII mode of a tree entry
    ///
    /// Directories are accepted both as `40000` and zero-padded `040000`.
    pub fn from_octal_str(mode: &str) -> Result<Self> {
        match mode {
            "100644" => Ok(EntryMode::Regular),
            "40000" | "040000" => Ok(EntryMode::Directory),
            _ => Err(ObjectError::UnsupportedEntryMode(mode.to_string())),
        }
    }
}

impl std::fmt::Display for EntryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06o}", self.as_u32())
    }
}

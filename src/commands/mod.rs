//! Command implementations
//!
//! - `plumbing`: Direct object manipulation (hash-object, cat-file, ls-tree,
//!   write-tree, commit-tree)
//! - `porcelain`: Repository setup (init)
//!
//! Each command is an `impl Repository` block writing its output to the
//! repository's writer.

pub mod plumbing;
pub mod porcelain;

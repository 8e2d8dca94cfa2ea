//! Plumbing commands (low-level object operations)
//!
//! ## Commands
//!
//! - `hash-object`: Compute object ID and optionally store in database
//! - `cat-file`: Print the content, type or size of an object
//! - `ls-tree`: List contents of a tree object
//! - `write-tree`: Store the working directory as a tree
//! - `commit-tree`: Record a commit for an existing tree

pub mod cat_file;
pub mod commit_tree;
pub mod hash_object;
pub mod ls_tree;
pub mod write_tree;

//! Core repository components
//!
//! - `database`: Loose object database for blobs, trees, and commits
//! - `refs`: The symbolic HEAD reference
//! - `repository`: Explicit store root and coordination of the areas
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod refs;
pub mod repository;
pub mod workspace;

//! A minimal content-addressable object store
//!
//! File content and directory structure are stored as immutable objects
//! (blobs, trees, commits) keyed by the SHA-1 of their canonical
//! serialization, each in its own zlib-compressed file.
//!
//! - `areas`: Object database, refs, workspace and repository
//! - `artifacts`: Object model, tree entry codec, hashing and compression
//! - `commands`: Command implementations behind the `grove` binary
//! - `errors`: The object store error taxonomy

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

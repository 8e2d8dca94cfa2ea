//! Object store data structures
//!
//! - `core`: Content hashing and the zlib codec
//! - `objects`: Object kinds (blob, tree, commit), their framing and the
//!   binary tree entry format

pub mod core;
pub mod objects;

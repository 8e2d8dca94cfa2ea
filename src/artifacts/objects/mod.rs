//! Object kinds and their canonical serialization
//!
//! Every object is stored as `<type> <size>\0<payload>`:
//!
//! - **Blob**: file content (raw bytes)
//! - **Tree**: directory listing (modes, names, and object IDs)
//! - **Commit**: snapshot record (tree, optional parent, identities, message)
//!
//! The object ID is the SHA-1 of that uncompressed serialization.

pub mod blob;
pub mod commit;
pub mod entry_mode;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;
pub mod tree_entry;

/// Length of a SHA-1 hash in raw bytes
pub const OBJECT_ID_BYTES: usize = 20;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = OBJECT_ID_BYTES * 2;

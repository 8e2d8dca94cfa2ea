//! Error types for the object store
//!
//! Every fallible operation of the core returns [`Result`]. None of these
//! errors is transient: the store is local and synchronous, so callers get
//! them back unchanged and decide what to do.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for object store operations
pub type Result<T> = std::result::Result<T, ObjectError>;

#[derive(Error, Debug)]
pub enum ObjectError {
    #[error("Invalid object id: {0}")]
    InvalidDigest(String),

    #[error("Object not found: {0}")]
    ObjectNotFound(ObjectId),

    #[error("Corrupt object: {0}")]
    CorruptObject(String),

    #[error("Repository already initialized at {}", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("Unsupported tree entry mode: {0}")]
    UnsupportedEntryMode(String),

    #[error("Invalid tree entry name: {0:?}")]
    InvalidEntryName(String),

    #[error("Invalid identity: {0:?}")]
    InvalidIdentity(String),

    #[error("Object {oid} is a {actual}, expected a {expected}")]
    UnexpectedObjectType {
        oid: ObjectId,
        expected: ObjectType,
        actual: ObjectType,
    },

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] std::io::Error),
}

impl ObjectError {
    pub(crate) fn corrupt(message: impl Into<String>) -> Self {
        ObjectError::CorruptObject(message.into())
    }
}

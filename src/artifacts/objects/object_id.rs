//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 20-byte SHA-1 digests, displayed as 40 lowercase
//! hexadecimal characters. They are the only key space of the object store.
//!
//! ## Storage
//!
//! Objects are stored in `.git/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::{OBJECT_ID_BYTES, OBJECT_ID_LENGTH};
use crate::errors::{ObjectError, Result};
use std::path::PathBuf;

/// Object identifier (SHA-1 hash)
///
/// Holds the raw digest bytes. Text conversions always go through
/// [`ObjectId::try_parse`] and [`Display`](std::fmt::Display), so an
/// `ObjectId` is well-formed by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId([u8; OBJECT_ID_BYTES]);

impl ObjectId {
    pub fn from_bytes(bytes: [u8; OBJECT_ID_BYTES]) -> Self {
        Self(bytes)
    }

    /// Parse and validate an object ID from its hexadecimal form
    ///
    /// Upper-case digits are accepted; the ID always displays in lower case.
    /// Anything other than 40 hex characters is an
    /// [`ObjectError::InvalidDigest`].
    pub fn try_parse(id: &str) -> Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(ObjectError::InvalidDigest(format!(
                "expected {OBJECT_ID_LENGTH} hex characters, got {}: {id:?}",
                id.len()
            )));
        }

        let mut bytes = [0; OBJECT_ID_BYTES];
        hex::decode_to_slice(id, &mut bytes)
            .map_err(|e| ObjectError::InvalidDigest(format!("{id:?}: {e}")))?;

        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; OBJECT_ID_BYTES] {
        &self.0
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    /// For example, `abc123...` becomes `ab/c123...`
    pub fn to_path(&self) -> PathBuf {
        let hex = self.to_string();
        let (dir, file) = hex.split_at(2);
        PathBuf::from(dir).join(file)
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

//! Binary tree entry codec
//!
//! ## Format
//!
//! Each entry: `<mode> <name>\0<20-byte-sha1>`, entries are concatenated with
//! no separator. The digest bytes are raw and may contain anything, including
//! spaces and NULs, so they are always read as a fixed-width field.
//!
//! Names are raw bytes. They only need to be free of `/` and NUL, so a name
//! that is not valid UTF-8 is still a valid entry.

use crate::artifacts::objects::OBJECT_ID_BYTES;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{ObjectError, Result};
use bytes::{BufMut, Bytes, BytesMut};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::io::BufRead;

/// A single `(mode, name, oid)` record of a tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeEntry {
    mode: EntryMode,
    name: Bytes,
    oid: ObjectId,
}

impl TreeEntry {
    /// Create an entry, checking that `name` is a single path component
    pub fn new(mode: EntryMode, name: impl Into<Vec<u8>>, oid: ObjectId) -> Result<Self> {
        let name = Bytes::from(name.into());
        Self::validate_name(&name)?;

        Ok(TreeEntry { mode, name, oid })
    }

    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// The name as text, with invalid UTF-8 replaced
    pub fn display_name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn is_tree(&self) -> bool {
        self.mode.is_tree()
    }

    pub fn object_type(&self) -> ObjectType {
        if self.is_tree() {
            ObjectType::Tree
        } else {
            ObjectType::Blob
        }
    }

    fn validate_name(name: &[u8]) -> Result<()> {
        let invalid = name.is_empty()
            || name == b"."
            || name == b".."
            || name.iter().any(|&b| b == b'/' || b == 0);

        if invalid {
            return Err(ObjectError::InvalidEntryName(
                String::from_utf8_lossy(name).into_owned(),
            ));
        }

        Ok(())
    }

    /// Canonical storage order: directories sort as if their name ended in '/'
    pub fn cmp_canonical(&self, other: &Self) -> Ordering {
        let suffix = |entry: &Self| if entry.is_tree() { Some(b'/') } else { None };

        self.name
            .iter()
            .copied()
            .chain(suffix(self))
            .cmp(other.name.iter().copied().chain(suffix(other)))
    }

    pub fn write_to(&self, buffer: &mut BytesMut) {
        buffer.put_slice(self.mode.as_str().as_bytes());
        buffer.put_u8(b' ');
        buffer.put_slice(&self.name);
        buffer.put_u8(0);
        buffer.put_slice(self.oid.as_bytes());
    }

    /// Read the next entry, or `None` at a clean end of input
    pub fn read_from(reader: &mut impl BufRead) -> Result<Option<Self>> {
        // Read "mode " (space-delimited)
        let mut mode_bytes = Vec::new();
        let n = reader.read_until(b' ', &mut mode_bytes)?;
        if n == 0 {
            return Ok(None);
        }
        if mode_bytes.pop() != Some(b' ') {
            return Err(ObjectError::corrupt("unexpected end of tree in entry mode"));
        }
        let mode = std::str::from_utf8(&mode_bytes)
            .map_err(|_| ObjectError::UnsupportedEntryMode(String::from_utf8_lossy(&mode_bytes).into()))?;
        let mode = EntryMode::from_octal_str(mode)?;

        // Read "name\0"
        let mut name = Vec::new();
        reader.read_until(0, &mut name)?;
        if name.pop() != Some(0) {
            return Err(ObjectError::corrupt("unexpected end of tree in entry name"));
        }

        // Read the raw object id
        let mut oid_bytes = [0; OBJECT_ID_BYTES];
        reader.read_exact(&mut oid_bytes).map_err(|_| {
            ObjectError::corrupt(format!(
                "unexpected end of tree in object id of {:?}",
                String::from_utf8_lossy(&name)
            ))
        })?;

        Self::new(mode, name, ObjectId::from_bytes(oid_bytes)).map(Some)
    }
}

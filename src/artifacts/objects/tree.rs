//! Tree object
//!
//! Trees represent one directory level. Files are referenced as blobs and
//! subdirectories as other trees, both by object ID, so a tree's ID changes
//! exactly when something below it changes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>` (see [`TreeEntry`])

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree_entry::TreeEntry;
use crate::errors::{ObjectError, Result};
use bytes::{Bytes, BytesMut};
use std::collections::HashSet;
use std::io::Cursor;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Build a tree from the entries of one directory level
    ///
    /// Entries are put in canonical order so that the same set of entries
    /// always produces the same object ID. Two entries with the same name are
    /// rejected.
    pub fn new(entries: impl IntoIterator<Item = TreeEntry>) -> Result<Self> {
        let mut entries = entries.into_iter().collect::<Vec<_>>();

        {
            let mut names = HashSet::with_capacity(entries.len());
            if let Some(duplicate) = entries.iter().find(|entry| !names.insert(entry.name())) {
                return Err(ObjectError::InvalidEntryName(format!(
                    "duplicate entry {}",
                    duplicate.display_name()
                )));
            }
        }

        entries.sort_by(TreeEntry::cmp_canonical);

        Ok(Tree { entries })
    }

    /// Entries in storage order
    pub fn entries(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter()
    }

    /// Entry names sorted bytewise, for display only
    pub fn list_names(&self) -> Vec<&[u8]> {
        let mut names = self.entries.iter().map(TreeEntry::name).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    /// One `<mode> <type> <oid>\t<name>` line per entry, in storage order
    pub fn display(&self) -> String {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{} {} {}\t{}\n",
                    entry.mode(),
                    entry.object_type(),
                    entry.oid(),
                    entry.display_name()
                )
            })
            .collect()
    }
}

impl Packable for Tree {
    fn payload(&self) -> Result<Bytes> {
        let mut content_bytes = BytesMut::new();
        for entry in &self.entries {
            entry.write_to(&mut content_bytes);
        }

        Ok(content_bytes.freeze())
    }
}

impl Unpackable for Tree {
    /// Decode entries in the order they are stored
    fn deserialize(payload: Bytes) -> Result<Self> {
        let mut reader = Cursor::new(payload);
        let mut entries = Vec::new();

        while let Some(entry) = TreeEntry::read_from(&mut reader)? {
            entries.push(entry);
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }
}

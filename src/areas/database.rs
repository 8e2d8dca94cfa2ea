use crate::artifacts::core::{codec, hasher};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox, RawObject, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::objects::tree_entry::TreeEntry;
use crate::errors::{ObjectError, Result};
use bytes::Bytes;
use fake::rand;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Loose object database rooted at `.git/objects`
///
/// Each object lives in its own zlib-compressed file at
/// `<prefix>/<suffix>` of its hexadecimal ID. Objects are immutable: writing
/// an ID that is already present never touches the existing file.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    pub fn exists(&self, object_id: &ObjectId) -> bool {
        self.object_path(object_id).is_file()
    }

    /// Serialize, hash, compress and persist `object`, returning its ID
    pub fn store(&self, object: &impl Object) -> Result<ObjectId> {
        let object_content = object.serialize()?;
        let object_id = hasher::hash(&object_content);

        if self.exists(&object_id) {
            tracing::debug!(%object_id, "object already stored");
            return Ok(object_id);
        }

        let compressed = codec::compress(&object_content)?;
        self.put(&object_id, &compressed)?;

        Ok(object_id)
    }

    /// Persist one directory level and return the ID of its tree
    pub fn store_tree(&self, entries: impl IntoIterator<Item = TreeEntry>) -> Result<ObjectId> {
        self.store(&Tree::new(entries)?)
    }

    /// Write already-compressed object bytes under `object_id`
    ///
    /// A no-op if the object exists. Otherwise the bytes go to a temporary
    /// file in the prefix directory which is then renamed into place, so a
    /// reader sees either no object or the complete one.
    pub fn put(&self, object_id: &ObjectId, compressed: &[u8]) -> Result<()> {
        let object_path = self.object_path(object_id);

        // write the object to disk unless it already exists
        if object_path.exists() {
            tracing::debug!(%object_id, "skipping write of existing object");
            return Ok(());
        }

        let object_dir = object_path
            .parent()
            .ok_or_else(|| ObjectError::corrupt(format!("invalid object path {}", object_path.display())))?;
        std::fs::create_dir_all(object_dir)?;

        let temp_object_path = object_dir.join(Self::generate_temp_name());
        let written = Self::write_temp_object(&temp_object_path, compressed)
            .and_then(|()| Self::publish_object(&temp_object_path, &object_path));

        match written {
            Ok(true) => {
                tracing::debug!(%object_id, bytes = compressed.len(), "object written");
                Ok(())
            }
            Ok(false) => {
                tracing::debug!(%object_id, "object written concurrently, discarding duplicate");
                let _ = std::fs::remove_file(&temp_object_path);
                Ok(())
            }
            Err(e) => {
                let _ = std::fs::remove_file(&temp_object_path);
                Err(e.into())
            }
        }
    }

    fn write_temp_object(temp_object_path: &Path, compressed: &[u8]) -> std::io::Result<()> {
        // the random name must not collide with a concurrent writer's temp file
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(temp_object_path)?;

        file.write_all(compressed)?;
        file.sync_all()
    }

    /// Move the temp file onto the final path. Returns `false` if another
    /// writer got there first.
    fn publish_object(temp_object_path: &Path, object_path: &Path) -> std::io::Result<bool> {
        if object_path.exists() {
            return Ok(false);
        }

        // rename the temp file to the object file to make it atomic
        std::fs::rename(temp_object_path, object_path)?;
        Ok(true)
    }

    /// Compressed bytes of the object named by the hexadecimal `digest`
    ///
    /// The digest is validated before storage is touched.
    pub fn get(&self, digest: &str) -> Result<Bytes> {
        let object_id = ObjectId::try_parse(digest)?;
        self.read_compressed(&object_id)
    }

    fn read_compressed(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = self.object_path(object_id);

        match std::fs::read(&object_path) {
            Ok(content) => Ok(content.into()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ObjectError::ObjectNotFound(*object_id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Read, decompress and frame-parse an object
    ///
    /// The decompressed bytes must hash back to `object_id`; anything else
    /// is reported as corruption rather than returned.
    pub fn load(&self, object_id: &ObjectId) -> Result<RawObject> {
        let compressed = self.read_compressed(object_id)?;
        let object_content = codec::decompress(&compressed)?;

        let actual_id = hasher::hash(&object_content);
        if actual_id != *object_id {
            return Err(ObjectError::corrupt(format!(
                "object {object_id} hashes to {actual_id}"
            )));
        }

        tracing::debug!(%object_id, bytes = object_content.len(), "object loaded");
        RawObject::parse(object_content)
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> Result<ObjectBox> {
        ObjectBox::try_from(self.load(object_id)?)
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> Result<Blob> {
        Blob::deserialize(self.load_as(object_id, ObjectType::Blob)?)
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> Result<Tree> {
        Tree::deserialize(self.load_as(object_id, ObjectType::Tree)?)
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> Result<Commit> {
        Commit::deserialize(self.load_as(object_id, ObjectType::Commit)?)
    }

    fn load_as(&self, object_id: &ObjectId, expected: ObjectType) -> Result<Bytes> {
        let raw = self.load(object_id)?;

        if raw.object_type() != expected {
            return Err(ObjectError::UnexpectedObjectType {
                oid: *object_id,
                expected,
                actual: raw.object_type(),
            });
        }

        Ok(raw.into_payload())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}-{}", std::process::id(), rand::random::<u32>())
    }
}

//! Object framing shared by all object kinds
//!
//! ## Format
//!
//! `<type> <size>\0<payload>`, where `<size>` is the decimal byte length of
//! `<payload>`. The payload may itself contain NUL bytes or type names, so
//! parsing reads exactly `<size>` bytes after the first NUL.

use crate::artifacts::core::hasher;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{ObjectError, Result};
use bytes::{BufMut, Bytes, BytesMut};
use derive_new::new;

pub trait Packable {
    /// Serialize the kind-specific body (everything after the header)
    fn payload(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(payload: Bytes) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn to_raw(&self) -> Result<RawObject> {
        Ok(RawObject::new(self.object_type(), self.payload()?))
    }

    /// Canonical serialization: header followed by the payload
    fn serialize(&self) -> Result<Bytes> {
        Ok(self.to_raw()?.serialize())
    }

    fn object_id(&self) -> Result<ObjectId> {
        Ok(hasher::hash(&self.serialize()?))
    }
}

/// An object whose payload has not been interpreted yet
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RawObject {
    object_type: ObjectType,
    payload: Bytes,
}

impl RawObject {
    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    pub fn into_payload(self) -> Bytes {
        self.payload
    }

    pub fn object_id(&self) -> ObjectId {
        hasher::hash(&self.serialize())
    }

    pub fn serialize(&self) -> Bytes {
        let header = format!("{} {}\0", self.object_type, self.payload.len());

        let mut object_bytes = BytesMut::with_capacity(header.len() + self.payload.len());
        object_bytes.put_slice(header.as_bytes());
        object_bytes.put_slice(&self.payload);

        object_bytes.freeze()
    }

    /// Split `data` into header and payload
    ///
    /// The header ends at the first NUL and must read `<type> <size>`.
    /// Bytes beyond the declared size are ignored; fewer bytes than declared
    /// is a corrupt object.
    pub fn parse(data: Bytes) -> Result<Self> {
        let header_end = data
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| ObjectError::corrupt("missing NUL after object header"))?;
        let header = &data[..header_end];

        let (object_type, size) = header
            .iter()
            .position(|&b| b == b' ')
            .map(|space| (&header[..space], &header[space + 1..]))
            .ok_or_else(|| ObjectError::corrupt("missing space in object header"))?;

        let object_type = ObjectType::try_from(object_type)?;
        let size = parse_size(size)?;

        let payload_start = header_end + 1;
        let available = data.len() - payload_start;
        if available < size {
            return Err(ObjectError::corrupt(format!(
                "{object_type} declares {size} bytes but only {available} are present"
            )));
        }
        if available > size {
            tracing::warn!(
                %object_type,
                declared = size,
                available,
                "ignoring trailing bytes after object payload"
            );
        }

        let payload = data.slice(payload_start..payload_start + size);
        Ok(Self::new(object_type, payload))
    }
}

fn parse_size(size: &[u8]) -> Result<usize> {
    // `str::parse` would accept a leading '+'
    if size.is_empty() || !size.iter().all(u8::is_ascii_digit) {
        return Err(ObjectError::corrupt(format!(
            "invalid object size {:?}",
            String::from_utf8_lossy(size)
        )));
    }

    std::str::from_utf8(size)
        .ok()
        .and_then(|size| size.parse::<usize>().ok())
        .ok_or_else(|| ObjectError::corrupt("object size out of range"))
}

pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectBox::Blob(_) => ObjectType::Blob,
            ObjectBox::Tree(_) => ObjectType::Tree,
            ObjectBox::Commit(_) => ObjectType::Commit,
        }
    }
}

impl TryFrom<RawObject> for ObjectBox {
    type Error = ObjectError;

    fn try_from(raw: RawObject) -> Result<Self> {
        let object_type = raw.object_type();
        let payload = raw.into_payload();

        Ok(match object_type {
            ObjectType::Blob => ObjectBox::Blob(Box::new(Blob::deserialize(payload)?)),
            ObjectType::Tree => ObjectBox::Tree(Box::new(Tree::deserialize(payload)?)),
            ObjectType::Commit => ObjectBox::Commit(Box::new(Commit::deserialize(payload)?)),
        })
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use std::io::Write;

/// What `cat-file` prints about an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatFileMode {
    /// The content: raw bytes for blobs and commits, a listing for trees
    Pretty,
    Type,
    Size,
}

impl Repository {
    pub fn cat_file(&mut self, object_id: &str, mode: CatFileMode) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_id)?;
        self.ensure_initialized()?;

        let object = self.database().load(&object_id)?;

        match mode {
            CatFileMode::Type => writeln!(self.writer(), "{}", object.object_type())?,
            CatFileMode::Size => writeln!(self.writer(), "{}", object.payload().len())?,
            CatFileMode::Pretty => match object.object_type() {
                ObjectType::Tree => {
                    let tree = Tree::deserialize(object.into_payload())?;
                    write!(self.writer(), "{}", tree.display())?;
                }
                ObjectType::Blob | ObjectType::Commit => {
                    self.writer().write_all(object.payload())?;
                }
            },
        }

        Ok(())
    }
}

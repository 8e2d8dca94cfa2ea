use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use std::io::Write;
use std::path::Path;

impl Repository {
    pub fn hash_object(&mut self, object_path: &Path, write: bool) -> anyhow::Result<()> {
        // read object file
        let object_data = self.workspace().read_file(object_path)?;
        let object = Blob::new(object_data);

        // write (if write is true) as compressed object file
        let object_id = if write {
            self.ensure_initialized()?;
            self.database().store(&object)?
        } else {
            object.object_id()?
        };

        writeln!(self.writer(), "{object_id}")?;

        Ok(())
    }
}

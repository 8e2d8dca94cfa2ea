use crate::areas::repository::Repository;
use crate::areas::workspace::WorkspaceEntry;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree_entry::TreeEntry;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Store the working directory as blobs and trees and print the root tree ID
    pub async fn write_tree(&mut self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let tree_id = match self.store_directory(Path::new("")).await? {
            Some(tree_id) => tree_id,
            // an empty work tree still has a (empty) root tree
            None => self.database().store_tree(Vec::<TreeEntry>::new())?,
        };

        writeln!(self.writer(), "{tree_id}")?;

        Ok(())
    }

    /// Store one directory level, children first
    ///
    /// Returns `None` for a directory with no files anywhere below it, since
    /// such a directory leaves no entry in its parent.
    async fn store_directory(&self, dir_path: &Path) -> anyhow::Result<Option<ObjectId>> {
        let mut entries = Vec::new();

        for entry in self.workspace().list_dir(dir_path)? {
            match entry {
                WorkspaceEntry::File { name, path } => {
                    let blob = Blob::new(self.workspace().read_file(&path)?);
                    let oid = self.database().store(&blob)?;
                    entries.push(TreeEntry::new(
                        EntryMode::Regular,
                        name.into_encoded_bytes(),
                        oid,
                    )?);
                }
                WorkspaceEntry::Directory { name, path } => {
                    if let Some(oid) = Box::pin(self.store_directory(&path)).await? {
                        entries.push(TreeEntry::new(
                            EntryMode::Directory,
                            name.into_encoded_bytes(),
                            oid,
                        )?);
                    }
                }
            }
        }

        if entries.is_empty() {
            tracing::debug!(path = %dir_path.display(), "skipping directory without files");
            return Ok(None);
        }

        Ok(Some(self.database().store_tree(entries)?))
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// List the entries of a tree, or of the tree of a commit
    pub fn ls_tree(&mut self, object_id: &str, name_only: bool) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_id)?;
        self.ensure_initialized()?;

        let tree = match self.database().parse_object(&object_id)? {
            ObjectBox::Tree(tree) => *tree,
            ObjectBox::Commit(commit) => self.database().parse_object_as_tree(commit.tree_oid())?,
            ObjectBox::Blob(_) => anyhow::bail!("Object {object_id} is not a tree"),
        };

        if name_only {
            // names are raw bytes and are written unchanged
            let mut writer = self.writer();
            for name in tree.list_names() {
                writer.write_all(name)?;
                writer.write_all(b"\n")?;
            }
        } else {
            write!(self.writer(), "{}", tree.display())?;
        }

        Ok(())
    }
}

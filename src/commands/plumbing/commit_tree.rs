use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Record a commit of an existing tree and print its ID
    ///
    /// No reference is moved; the caller decides what to do with the ID.
    pub fn commit_tree(
        &mut self,
        tree: &str,
        parent: Option<&str>,
        message: &str,
    ) -> anyhow::Result<()> {
        let tree_oid = ObjectId::try_parse(tree)?;
        let parent = parent.map(ObjectId::try_parse).transpose()?;
        self.ensure_initialized()?;

        // both must already be stored, with the right types
        self.database().parse_object_as_tree(&tree_oid)?;
        if let Some(parent) = &parent {
            self.database().parse_object_as_commit(parent)?;
        }

        let author = Author::load_from_env()?;
        let committer = Author::load_committer_from_env(&author)?;

        let mut message = message.to_string();
        if !message.ends_with('\n') {
            message.push('\n');
        }

        let commit = Commit::new(tree_oid, parent, author, committer, message);
        let commit_id = self.database().store(&commit)?;

        writeln!(self.writer(), "{commit_id}")?;

        Ok(())
    }
}

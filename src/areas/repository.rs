use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the store root inside the work tree
pub const GIT_DIR_NAME: &str = ".git";

/// A work tree together with the object store rooted at `<path>/.git`
///
/// Every area receives its location from here; nothing below this type
/// consults the process's current directory.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;
        let git_path = path.join(GIT_DIR_NAME);

        let database = Database::new(git_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(git_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            workspace,
            refs,
        })
    }

    pub fn git_path(&self) -> Box<Path> {
        self.path.join(GIT_DIR_NAME).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Fail unless `init` has created the store
    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if !self.database.objects_path().is_dir() {
            anyhow::bail!(
                "Not a repository (no object store at {})",
                self.database.objects_path().display()
            );
        }

        Ok(())
    }
}

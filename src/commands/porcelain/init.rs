use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult, UserErrorKind};
use std::fs;
use std::io::Write;

impl Repository {
    /// Create `.gitlet` with its collections, the root commit, and the default branch
    ///
    /// Returns the id of the root commit.
    pub fn init(&self) -> RepositoryResult<ObjectId> {
        if self.is_initialized() {
            return Err(RepositoryError::user(
                UserErrorKind::AlreadyInitialized,
                "A Gitlet version-control system already exists in the current directory.",
            ));
        }

        fs::create_dir_all(self.path())?;
        self.database().create()?;
        self.stage().create()?;
        fs::create_dir_all(self.refs().refs_path())?;

        let root = self.database().store(&Commit::root())?;
        let root_oid = root.oid().clone();
        let branch = self.config().default_branch();

        self.refs().update_head(&root_oid)?;
        self.refs().update_branch(branch, &root_oid)?;
        self.refs().set_current_branch(branch)?;
        tracing::info!(path = %self.path().display(), %branch, root = %root_oid, "initialized repository");

        writeln!(
            self.writer(),
            "Initialized empty Gitlet repository in {}",
            self.metadata_path().display()
        )?;

        Ok(root_oid)
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryResult;
use std::io::Write;

impl Repository {
    /// Create `name` pointing at HEAD; the current branch is unchanged
    pub fn branch(&self, name: &str) -> RepositoryResult<ObjectId> {
        self.ensure_initialized()?;

        let branch = BranchName::try_parse(name.to_string())?;
        let head = self.refs().read_head()?;
        self.refs().create_branch(&branch, &head)?;
        tracing::info!(%branch, oid = %head, "created branch");

        Ok(head)
    }

    /// Delete the branch pointer only; its commits stay in the store
    pub fn rm_branch(&self, name: &str) -> RepositoryResult<ObjectId> {
        self.ensure_initialized()?;

        let branch = BranchName::try_parse(name.to_string())?;
        let oid = self.refs().delete_branch(&branch)?;

        writeln!(
            self.writer(),
            "Deleted branch {} (was {}).",
            branch,
            oid.to_short_oid()
        )?;

        Ok(oid)
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::inspector::Inspector;
use crate::errors::{RepositoryError, RepositoryResult, UserErrorKind};
use std::collections::BTreeSet;
use std::io::Write;

impl Repository {
    /// Record the staged changes as a child of HEAD on the current branch
    ///
    /// Blobs that did not exist before are listed as new. An existing blob is listed as
    /// restored when HEAD does not already track it under its name (a re-added or reverted
    /// file). Staged removals become `removed` markers. Both staging areas are empty afterwards.
    pub fn commit(&self, message: &str) -> RepositoryResult<ObjectId> {
        self.ensure_initialized()?;

        if message.trim().is_empty() {
            return Err(RepositoryError::user(
                UserErrorKind::EmptyMessage,
                "Please enter a commit message.",
            ));
        }

        let staged_additions = self.stage().staged_additions()?;
        if staged_additions.is_empty() {
            return Err(RepositoryError::user(
                UserErrorKind::NothingToCommit,
                "No changes added to the commit.",
            ));
        }

        let removed = self
            .stage()
            .staged_removals()?
            .into_iter()
            .collect::<BTreeSet<_>>();
        let parent = self.refs().read_head()?;
        let branch = self.refs().current_branch()?;
        let tracked = Inspector::new(self).tracked_files()?;

        let mut blob_ids = BTreeSet::new();
        let mut restored = BTreeSet::new();
        for (name, content) in staged_additions {
            let stored = self.database().store(&Blob::new(name.clone(), content))?;
            if stored.is_new() {
                blob_ids.insert(stored.oid().clone());
            } else if tracked.get(&name) != Some(stored.oid()) {
                restored.insert(stored.oid().clone());
            }
        }

        let commit = Commit::new(
            vec![parent],
            blob_ids,
            removed,
            self.config().now(),
            message.to_string(),
        )
        .with_restored(restored);
        let commit_oid = self.database().store(&commit)?.oid().clone();

        self.refs().update_head(&commit_oid)?;
        self.refs().update_branch(&branch, &commit_oid)?;
        self.stage().clear_additions()?;
        self.stage().clear_removals()?;
        tracing::info!(
            oid = %commit_oid,
            %branch,
            blobs = commit.blob_ids().len(),
            restored = commit.restored().len(),
            removed = commit.removed().len(),
            "created commit"
        );

        writeln!(
            self.writer(),
            "[{} {}] {}",
            branch,
            commit_oid.to_short_oid(),
            commit.short_message()
        )?;

        Ok(commit_oid)
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use crate::errors::RepositoryResult;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Files tracked at HEAD, mapped to the blob that last recorded them
    ///
    /// Commits only list the blobs they record, so the first-parent history is walked newest
    /// first: the most recent mention of a name decides. A `removed` marker ends tracking, a
    /// new or restored blob records the content.
    pub fn tracked_files(&self) -> RepositoryResult<BTreeMap<String, ObjectId>> {
        let database = self.repository.database();
        let head = self.repository.refs().read_head()?;

        let mut seen = BTreeSet::new();
        let mut tracked = BTreeMap::new();

        for entry in RevList::new(database, head) {
            let entry = entry?;

            for name in entry.commit.removed() {
                seen.insert(name.clone());
            }

            for blob_id in entry.commit.recorded_blob_ids() {
                let blob = database.load_blob(blob_id)?;
                if seen.insert(blob.name().to_string()) {
                    tracked.insert(blob.name().to_string(), blob_id.clone());
                }
            }
        }

        Ok(tracked)
    }

    /// Compare the working copy of `name` against `expected` content
    pub fn check_workspace(
        &self,
        name: &str,
        expected: &[u8],
    ) -> RepositoryResult<Option<WorkspaceChangeType>> {
        let workspace = self.repository.workspace();

        if !workspace.contains(name) {
            return Ok(Some(WorkspaceChangeType::Deleted));
        }

        if workspace.read_file(name)?.as_ref() != expected {
            Ok(Some(WorkspaceChangeType::Modified))
        } else {
            Ok(None)
        }
    }

    pub fn check_tracked_file(
        &self,
        name: &str,
        blob_id: &ObjectId,
    ) -> RepositoryResult<Option<WorkspaceChangeType>> {
        let blob = self.repository.database().load_blob(blob_id)?;

        self.check_workspace(name, blob.content())
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use crate::artifacts::status::inspector::Inspector;
use crate::errors::RepositoryResult;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

/// Repository status, section by section, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub current_branch: BranchName,
    /// Every branch, sorted, the current one included
    pub branches: Vec<BranchName>,
    /// Names staged for addition, sorted
    pub staged: Vec<String>,
    /// Names staged for removal, sorted
    pub removed: Vec<String>,
    /// Tracked or staged files whose working copy differs from what was recorded
    pub modified: BTreeMap<String, WorkspaceChangeType>,
    /// Working files neither tracked nor staged, sorted
    pub untracked: Vec<String>,
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self) -> RepositoryResult<StatusReport> {
        let refs = self.repository.refs();
        let stage = self.repository.stage();
        let inspector = Inspector::new(self.repository);

        let current_branch = refs.current_branch()?;
        let branches = refs.list_branches()?;

        let staged_additions = stage.staged_additions()?;
        let removed = stage.staged_removals()?;
        let staged = staged_additions
            .iter()
            .map(|(name, _)| name.clone())
            .collect::<Vec<_>>();

        let mut modified = BTreeMap::new();
        for (name, content) in &staged_additions {
            if let Some(change) = inspector.check_workspace(name, content)? {
                modified.insert(name.clone(), change);
            }
        }

        let staged_names = staged
            .iter()
            .chain(removed.iter())
            .cloned()
            .collect::<BTreeSet<_>>();
        let tracked = inspector.tracked_files()?;

        for (name, blob_id) in &tracked {
            if staged_names.contains(name) {
                continue;
            }
            if let Some(change) = inspector.check_tracked_file(name, blob_id)? {
                modified.insert(name.clone(), change);
            }
        }

        let untracked = self
            .repository
            .workspace()
            .list_files()?
            .into_iter()
            .filter(|name| !tracked.contains_key(name) && !staged_names.contains(name))
            .collect();

        Ok(StatusReport {
            current_branch,
            branches,
            staged,
            removed,
            modified,
            untracked,
        })
    }
}

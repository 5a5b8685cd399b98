//! References (HEAD, current, branches)
//!
//! References are named, mutable pointers stored as flat text files under `.gitlet/refs`.
//!
//! ## Reference Types
//!
//! - `HEAD`: the commit at the tip of the checked-out branch
//! - `current`: the name of the checked-out branch (an indirection, not a commit id)
//! - `<branch>`: the tip commit of a branch
//!
//! ## File Format
//!
//! Each file holds the literal value: a 40-character commit id, or a branch name for
//! `current`.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult, UserErrorKind};
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Name of the reference holding the checked-out branch name
pub const CURRENT_REF_NAME: &str = "current";

/// References manager
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the refs directory (`.gitlet/refs`)
    path: Box<Path>,
}

impl Refs {
    pub fn refs_path(&self) -> &Path {
        &self.path
    }

    /// Create the reference if absent, otherwise overwrite its value
    pub fn set_ref(&self, name: &str, value: &str) -> RepositoryResult<()> {
        let path = self.ref_path(name);

        // open the ref file as WRONLY and CREAT to write the value to it
        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(value.as_bytes())?;
        tracing::debug!(reference = name, value, "updated reference");

        Ok(())
    }

    pub fn read_ref(&self, name: &str) -> RepositoryResult<String> {
        let path = self.ref_path(name);

        if !path.is_file() {
            return Err(RepositoryError::user(
                UserErrorKind::RefNotFound,
                format!("No reference named {name}."),
            ));
        }

        Ok(std::fs::read_to_string(&path)?.trim().to_string())
    }

    pub fn contains_ref(&self, name: &str) -> bool {
        self.ref_path(name).is_file()
    }

    /// All reference names, bookkeeping refs included, sorted
    pub fn list_refs(&self) -> RepositoryResult<Vec<String>> {
        let mut names = Vec::new();

        for entry in std::fs::read_dir(&self.path)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Reference names excluding `HEAD` and `current`, sorted
    ///
    /// Files whose name is not a valid branch name (editor leftovers and the like) are skipped.
    pub fn list_branches(&self) -> RepositoryResult<Vec<BranchName>> {
        let branches = self
            .list_refs()?
            .into_iter()
            .filter(|name| name != HEAD_REF_NAME && name != CURRENT_REF_NAME)
            .filter_map(|name| match BranchName::try_parse(name.clone()) {
                Ok(branch) => Some(branch),
                Err(error) => {
                    tracing::warn!(file = %name, %error, "ignoring stray file in refs");
                    None
                }
            })
            .collect();

        Ok(branches)
    }

    pub fn read_head(&self) -> RepositoryResult<ObjectId> {
        self.read_oid(HEAD_REF_NAME)
    }

    pub fn update_head(&self, oid: &ObjectId) -> RepositoryResult<()> {
        self.set_ref(HEAD_REF_NAME, oid.as_ref())
    }

    /// The checked-out branch, as named by `current`
    pub fn current_branch(&self) -> RepositoryResult<BranchName> {
        let name = self.read_ref(CURRENT_REF_NAME).map_err(missing_is_corrupt)?;
        let branch = BranchName::try_parse(name.clone()).map_err(|_| {
            RepositoryError::integrity(format!("{CURRENT_REF_NAME} holds an invalid branch name {name:?}"))
        })?;

        if !self.contains_ref(branch.as_ref()) {
            return Err(RepositoryError::integrity(format!(
                "{CURRENT_REF_NAME} names missing branch {branch}"
            )));
        }

        Ok(branch)
    }

    pub fn set_current_branch(&self, branch: &BranchName) -> RepositoryResult<()> {
        self.set_ref(CURRENT_REF_NAME, branch.as_ref())
    }

    pub fn is_current_branch(&self, branch: &BranchName) -> RepositoryResult<bool> {
        Ok(&self.current_branch()? == branch)
    }

    pub fn read_branch(&self, branch: &BranchName) -> RepositoryResult<ObjectId> {
        self.read_oid(branch.as_ref())
    }

    pub fn update_branch(&self, branch: &BranchName, oid: &ObjectId) -> RepositoryResult<()> {
        self.set_ref(branch.as_ref(), oid.as_ref())
    }

    pub fn create_branch(&self, branch: &BranchName, source_oid: &ObjectId) -> RepositoryResult<()> {
        // check whether another branch with the same name already exists
        if self.contains_ref(branch.as_ref()) {
            return Err(RepositoryError::user(
                UserErrorKind::BranchExists,
                "A branch with that name already exists.",
            ));
        }

        self.update_branch(branch, source_oid)
    }

    pub fn delete_branch(&self, branch: &BranchName) -> RepositoryResult<ObjectId> {
        if !self.contains_ref(branch.as_ref()) {
            return Err(RepositoryError::user(
                UserErrorKind::RefNotFound,
                "A branch with that name does not exist.",
            ));
        }

        if self.is_current_branch(branch)? {
            return Err(RepositoryError::user(
                UserErrorKind::CurrentBranch,
                "Cannot remove the current branch.",
            ));
        }

        let oid = self.read_branch(branch)?;
        std::fs::remove_file(self.ref_path(branch.as_ref()))?;
        tracing::debug!(%branch, %oid, "deleted branch");

        Ok(oid)
    }

    fn read_oid(&self, name: &str) -> RepositoryResult<ObjectId> {
        let value = self.read_ref(name).map_err(missing_is_corrupt)?;

        ObjectId::try_parse(value.clone()).map_err(|_| {
            RepositoryError::integrity(format!("reference {name} holds {value:?}, not a commit id"))
        })
    }

    fn ref_path(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

// refs the repository cannot work without are corruption, not user mistakes, when absent
fn missing_is_corrupt(error: RepositoryError) -> RepositoryError {
    match error.user_kind() {
        Some(UserErrorKind::RefNotFound) => RepositoryError::integrity(error.to_string()),
        _ => error,
    }
}

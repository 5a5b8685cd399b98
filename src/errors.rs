//! Error taxonomy
//!
//! Every repository operation returns a [`RepositoryResult`]. Failures fall into three groups:
//!
//! - **User errors**: a precondition did not hold (blank message, nothing staged, missing file,
//!   ...). Nothing was mutated; the CLI prints the message and exits normally.
//! - **Integrity errors**: a reference or commit points at something the store cannot produce.
//!   The repository is corrupt and there is no safe recovery.
//! - **I/O errors**: the underlying filesystem failed. They are propagated unmasked.

use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Reason a user-level precondition failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserErrorKind {
    AlreadyInitialized,
    NotInitialized,
    EmptyMessage,
    NothingToCommit,
    FileNotFound,
    InvalidPath,
    NothingToRemove,
    RefNotFound,
    NotFound,
    BranchExists,
    CurrentBranch,
    InvalidBranchName,
    InvalidConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, new)]
#[error("{detail}")]
pub struct UserError {
    kind: UserErrorKind,
    detail: String,
}

impl UserError {
    pub fn kind(&self) -> UserErrorKind {
        self.kind
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    User(#[from] UserError),
    #[error("object {0} is missing from the object store")]
    ObjectNotFound(ObjectId),
    #[error("repository is corrupt: {0}")]
    Integrity(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RepositoryError {
    pub fn user(kind: UserErrorKind, detail: impl Into<String>) -> Self {
        RepositoryError::User(UserError::new(kind, detail.into()))
    }

    pub fn integrity(detail: impl Into<String>) -> Self {
        RepositoryError::Integrity(detail.into())
    }

    /// The user error kind, if this is a user error
    pub fn user_kind(&self) -> Option<UserErrorKind> {
        match self {
            RepositoryError::User(error) => Some(error.kind()),
            _ => None,
        }
    }

    pub fn is_user_error(&self) -> bool {
        matches!(self, RepositoryError::User(_))
    }

    /// Whether the store or refs are in a state no operation can repair
    pub fn is_integrity_error(&self) -> bool {
        matches!(
            self,
            RepositoryError::ObjectNotFound(_) | RepositoryError::Integrity(_)
        )
    }
}

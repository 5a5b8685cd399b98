use crate::areas::refs::{CURRENT_REF_NAME, HEAD_REF_NAME};
use crate::artifacts::branch::{DEFAULT_BRANCH, INVALID_BRANCH_NAME_REGEX};
use crate::errors::{RepositoryError, RepositoryResult, UserErrorKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> RepositoryResult<Self> {
        if name.is_empty() {
            return Err(RepositoryError::user(
                UserErrorKind::InvalidBranchName,
                "A branch name cannot be empty.",
            ));
        }

        if name == HEAD_REF_NAME || name == CURRENT_REF_NAME {
            return Err(RepositoryError::user(
                UserErrorKind::InvalidBranchName,
                format!("{name} is a reserved reference name."),
            ));
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX).map_err(|e| {
            RepositoryError::integrity(format!("invalid branch name regex: {e}"))
        })?;

        if re.is_match(&name) {
            Err(RepositoryError::user(
                UserErrorKind::InvalidBranchName,
                format!("Invalid branch name: {name}"),
            ))
        } else {
            Ok(Self(name))
        }
    }

    pub fn default_branch() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

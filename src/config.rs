//! Repository configuration
//!
//! Settings are read from the environment, once, when a repository handle is opened.
//!
//! | Variable | Meaning | Default |
//! | --- | --- | --- |
//! | `GITLET_DEFAULT_BRANCH` | branch created by `init` | `master` |
//! | `GITLET_COMMIT_DATE` | fixed timestamp for new commits | local clock |
//!
//! `GITLET_COMMIT_DATE` accepts RFC 2822 or `%Y-%m-%d %H:%M:%S %z`.

use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::{RepositoryError, RepositoryResult, UserErrorKind};
use chrono::{DateTime, FixedOffset, Timelike};

pub const DEFAULT_BRANCH_ENV: &str = "GITLET_DEFAULT_BRANCH";
pub const COMMIT_DATE_ENV: &str = "GITLET_COMMIT_DATE";
pub const LOG_FILTER_ENV: &str = "GITLET_LOG";

#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    default_branch: BranchName,
    commit_date: Option<DateTime<FixedOffset>>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            default_branch: BranchName::default_branch(),
            commit_date: None,
        }
    }
}

impl RepositoryConfig {
    pub fn new(default_branch: BranchName, commit_date: Option<DateTime<FixedOffset>>) -> Self {
        RepositoryConfig {
            default_branch,
            commit_date: commit_date.map(truncate_to_seconds),
        }
    }

    pub fn load_from_env() -> RepositoryResult<Self> {
        let default_branch = match std::env::var(DEFAULT_BRANCH_ENV) {
            Ok(name) if !name.trim().is_empty() => BranchName::try_parse(name.trim().to_string())?,
            _ => BranchName::default_branch(),
        };

        let commit_date = match std::env::var(COMMIT_DATE_ENV) {
            Ok(date) => Some(parse_commit_date(&date)?),
            Err(_) => None,
        };

        Ok(Self::new(default_branch, commit_date))
    }

    pub fn default_branch(&self) -> &BranchName {
        &self.default_branch
    }

    /// Timestamp for a commit created right now
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.commit_date
            .unwrap_or_else(|| truncate_to_seconds(chrono::Local::now().fixed_offset()))
    }
}

fn parse_commit_date(date: &str) -> RepositoryResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(date)
        .or_else(|_| DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S %z"))
        .map_err(|_| {
            RepositoryError::user(
                UserErrorKind::InvalidConfig,
                format!("Invalid {COMMIT_DATE_ENV} value: {date}"),
            )
        })
}

// serialized commits keep whole seconds, so in-memory timestamps must too
fn truncate_to_seconds(timestamp: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    timestamp.with_nanosecond(0).unwrap_or(timestamp)
}

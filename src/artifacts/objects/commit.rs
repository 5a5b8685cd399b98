//! Commit object
//!
//! Commits are history nodes. Each commit records:
//! - Parent commit ID(s) (empty only for the root commit)
//! - The blobs newly introduced by this commit (not a full snapshot)
//! - Already stored blobs that this commit records again for a name (a re-added or reverted
//!   file)
//! - The file names whose removal was staged when it was made
//! - A timestamp and a message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! parent <parent-sha>
//! blob <blob-sha>
//! restored <blob-sha>
//! removed <file-name>
//! timestamp <unix-seconds> <timezone>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, Utc};
use std::collections::BTreeSet;
use std::io::BufRead;

/// Message of the commit every repository starts from
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit IDs (empty for the root commit)
    parents: Vec<ObjectId>,
    /// Blobs persisted for the first time by this commit
    blob_ids: BTreeSet<ObjectId>,
    /// Blobs stored by an earlier commit that this commit records again
    restored: BTreeSet<ObjectId>,
    /// File names staged for removal when this commit was made
    removed: BTreeSet<String>,
    timestamp: DateTime<FixedOffset>,
    message: String,
}

impl Commit {
    pub fn new(
        parents: Vec<ObjectId>,
        blob_ids: BTreeSet<ObjectId>,
        removed: BTreeSet<String>,
        timestamp: DateTime<FixedOffset>,
        message: String,
    ) -> Self {
        Commit {
            parents,
            blob_ids,
            restored: BTreeSet::new(),
            removed,
            timestamp,
            message,
        }
    }

    pub fn with_restored(mut self, restored: BTreeSet<ObjectId>) -> Self {
        self.restored = restored;
        self
    }

    /// The parentless commit created by `init`
    pub fn root() -> Self {
        Self::new(
            Vec::new(),
            BTreeSet::new(),
            BTreeSet::new(),
            DateTime::<Utc>::UNIX_EPOCH.fixed_offset(),
            ROOT_COMMIT_MESSAGE.to_string(),
        )
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn blob_ids(&self) -> &BTreeSet<ObjectId> {
        &self.blob_ids
    }

    pub fn restored(&self) -> &BTreeSet<ObjectId> {
        &self.restored
    }

    /// Every blob this commit records, new or restored
    pub fn recorded_blob_ids(&self) -> impl Iterator<Item = &ObjectId> {
        self.blob_ids.iter().chain(self.restored.iter())
    }

    pub fn removed(&self) -> &BTreeSet<String> {
        &self.removed
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Timestamp in the form "Thu Jan 1 00:00:00 1970 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    fn header_lines(&self) -> Vec<String> {
        let mut lines = vec![];

        for parent in &self.parents {
            lines.push(format!("parent {}", parent.as_ref()));
        }
        for blob_id in &self.blob_ids {
            lines.push(format!("blob {}", blob_id.as_ref()));
        }
        for blob_id in &self.restored {
            lines.push(format!("restored {}", blob_id.as_ref()));
        }
        for name in &self.removed {
            lines.push(format!("removed {name}"));
        }
        lines.push(format!(
            "timestamp {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));

        lines
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let object_content = format!("{}\n\n{}", self.header_lines().join("\n"), self.message);

        frame(self.object_type(), object_content.as_bytes())
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Invalid commit object: content is not UTF-8")?;

        let (header, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;

        let mut parents = Vec::new();
        let mut blob_ids = BTreeSet::new();
        let mut restored = BTreeSet::new();
        let mut removed = BTreeSet::new();
        let mut timestamp = None;

        for line in header.lines() {
            let (key, value) = line
                .split_once(' ')
                .with_context(|| format!("Invalid commit object: malformed line {line:?}"))?;

            match key {
                "parent" => parents.push(ObjectId::try_parse(value.to_string())?),
                "blob" => {
                    blob_ids.insert(ObjectId::try_parse(value.to_string())?);
                }
                "restored" => {
                    restored.insert(ObjectId::try_parse(value.to_string())?);
                }
                "removed" => {
                    removed.insert(value.to_string());
                }
                "timestamp" => {
                    timestamp = Some(
                        DateTime::parse_from_str(value, "%s %z")
                            .with_context(|| format!("Invalid commit timestamp {value:?}"))?,
                    );
                }
                _ => anyhow::bail!("Invalid commit object: unknown field {key:?}"),
            }
        }

        let timestamp = timestamp.context("Invalid commit object: missing timestamp line")?;

        Ok(Self::new(
            parents,
            blob_ids,
            removed,
            timestamp,
            message.to_string(),
        )
        .with_restored(restored))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        let mut lines = self.header_lines();
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines.join("\n")
    }
}

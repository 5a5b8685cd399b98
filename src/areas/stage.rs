//! Staging area
//!
//! Two separate areas hold changes pending the next commit:
//!
//! - `add-stage/`: files staged for addition, one file per staged name holding the full content
//! - `rm-stage/`: files staged for removal, with the content they had when staged
//!
//! A name is in at most one area at a time: staging it in one area drops it from the other.
//! Staged content is stored verbatim rather than hashed; the object store deduplicates at
//! commit time.

use crate::errors::{RepositoryError, RepositoryResult, UserErrorKind};
use bytes::Bytes;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const ADD_STAGE_DIR: &str = "add-stage";
const RM_STAGE_DIR: &str = "rm-stage";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageArea {
    Addition,
    Removal,
}

impl StageArea {
    fn dir_name(&self) -> &str {
        match self {
            StageArea::Addition => ADD_STAGE_DIR,
            StageArea::Removal => RM_STAGE_DIR,
        }
    }

    fn other(&self) -> StageArea {
        match self {
            StageArea::Addition => StageArea::Removal,
            StageArea::Removal => StageArea::Addition,
        }
    }
}

#[derive(Debug)]
pub struct Stage {
    /// Path to the repository's metadata directory (`.gitlet`)
    path: Box<Path>,
}

impl Stage {
    pub fn new(path: Box<Path>) -> Self {
        Stage { path }
    }

    pub fn area_path(&self, area: StageArea) -> PathBuf {
        self.path.join(area.dir_name())
    }

    pub fn create(&self) -> RepositoryResult<()> {
        std::fs::create_dir_all(self.area_path(StageArea::Addition))?;
        std::fs::create_dir_all(self.area_path(StageArea::Removal))?;

        Ok(())
    }

    /// Record `content` under `name` for the next commit, replacing any earlier staged content
    pub fn stage_for_addition(&self, name: &str, content: &[u8]) -> RepositoryResult<()> {
        self.stage(StageArea::Addition, name, content)
    }

    /// Mark `name` as removed in the next commit, dropping any staged addition
    pub fn stage_for_removal(&self, name: &str, content: &[u8]) -> RepositoryResult<()> {
        self.stage(StageArea::Removal, name, content)
    }

    /// Drop a single staged addition
    pub fn unstage(&self, name: &str) -> RepositoryResult<()> {
        if !self.is_staged(StageArea::Addition, name) {
            return Err(RepositoryError::user(
                UserErrorKind::NothingToRemove,
                "No reason to remove the file.",
            ));
        }

        self.remove_entry(StageArea::Addition, name)
    }

    pub fn is_staged(&self, area: StageArea, name: &str) -> bool {
        self.entry_path(area, name).is_file()
    }

    /// `(name, content)` pairs staged for addition, ordered by name
    pub fn staged_additions(&self) -> RepositoryResult<Vec<(String, Bytes)>> {
        self.list_names(StageArea::Addition)?
            .into_iter()
            .map(|name| -> RepositoryResult<(String, Bytes)> {
                let content = std::fs::read(self.entry_path(StageArea::Addition, &name))?;
                Ok((name, content.into()))
            })
            .collect()
    }

    /// Names staged for removal, ordered
    pub fn staged_removals(&self) -> RepositoryResult<Vec<String>> {
        self.list_names(StageArea::Removal)
    }

    pub fn clear_additions(&self) -> RepositoryResult<()> {
        self.clear(StageArea::Addition)
    }

    pub fn clear_removals(&self) -> RepositoryResult<()> {
        self.clear(StageArea::Removal)
    }

    fn stage(&self, area: StageArea, name: &str, content: &[u8]) -> RepositoryResult<()> {
        self.remove_overlapping_entries(area, name)?;

        let path = self.entry_path(area, name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;

        if self.is_staged(area.other(), name) {
            self.remove_entry(area.other(), name)?;
        }
        tracing::debug!(file = name, ?area, "staged file");

        Ok(())
    }

    /// Drop entries of `area` that cannot coexist with a file staged as `name`
    ///
    /// A staged `dir` blocks staging `dir/file` and the other way around. The working tree
    /// cannot hold both, so the older entry is stale and the new one replaces it.
    fn remove_overlapping_entries(&self, area: StageArea, name: &str) -> RepositoryResult<()> {
        let components = name.split('/').collect::<Vec<_>>();

        for depth in 1..components.len() {
            let prefix = components[..depth].join("/");
            if self.is_staged(area, &prefix) {
                tracing::debug!(file = %prefix, replaced_by = name, ?area, "dropped stale staged entry");
                self.remove_entry(area, &prefix)?;
            }
        }

        let path = self.entry_path(area, name);
        if path.is_dir() {
            tracing::debug!(directory = name, ?area, "dropped stale staged entries");
            std::fs::remove_dir_all(&path)?;
        }

        Ok(())
    }

    fn list_names(&self, area: StageArea) -> RepositoryResult<Vec<String>> {
        let area_path = self.area_path(area);
        let mut names = Vec::new();

        for entry in WalkDir::new(&area_path).min_depth(1) {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative_path = entry.path().strip_prefix(&area_path).map_err(|_| {
                RepositoryError::integrity(format!(
                    "staged entry {} escapes its area",
                    entry.path().display()
                ))
            })?;
            names.push(to_name(relative_path));
        }

        names.sort();
        Ok(names)
    }

    fn remove_entry(&self, area: StageArea, name: &str) -> RepositoryResult<()> {
        let path = self.entry_path(area, name);
        std::fs::remove_file(&path)?;
        self.prune_empty_parent_dirs(area, &path)
    }

    fn prune_empty_parent_dirs(&self, area: StageArea, path: &Path) -> RepositoryResult<()> {
        if let Some(parent) = path.parent()
            && parent != self.area_path(area)
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)?;
            self.prune_empty_parent_dirs(area, parent)?;
        }

        Ok(())
    }

    fn clear(&self, area: StageArea) -> RepositoryResult<()> {
        let area_path = self.area_path(area);
        if area_path.exists() {
            std::fs::remove_dir_all(&area_path)?;
        }
        std::fs::create_dir_all(&area_path)?;

        Ok(())
    }

    fn entry_path(&self, area: StageArea, name: &str) -> PathBuf {
        name.split('/')
            .fold(self.area_path(area), |path, component| path.join(component))
    }
}

fn to_name(relative_path: &Path) -> String {
    relative_path
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

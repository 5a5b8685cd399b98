use crate::areas::repository::METADATA_DIR;
use crate::errors::{RepositoryError, RepositoryResult, UserErrorKind};
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// The working directory, seen as a flat set of `/`-separated file names
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Turn a user-supplied path into a file name relative to the working root
    ///
    /// Rejects empty paths, absolute paths, `..` components, anything inside the metadata
    /// directory, and names containing line breaks (commit records are line-oriented).
    pub fn normalize(&self, file_path: &str) -> RepositoryResult<String> {
        let invalid = || {
            RepositoryError::user(
                UserErrorKind::InvalidPath,
                format!("Invalid file path: {}", file_path.escape_debug()),
            )
        };

        if file_path.contains(['\n', '\r']) {
            return Err(invalid());
        }

        let mut components = Vec::new();
        for component in Path::new(file_path).components() {
            match component {
                Component::Normal(name) => components.push(name.to_string_lossy().to_string()),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(invalid());
                }
            }
        }

        match components.first() {
            None => Err(invalid()),
            Some(first) if first == METADATA_DIR => Err(invalid()),
            Some(_) => Ok(components.join("/")),
        }
    }

    pub fn file_path(&self, name: &str) -> PathBuf {
        name.split('/')
            .fold(self.path.to_path_buf(), |path, component| path.join(component))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.file_path(name).is_file()
    }

    pub fn read_file(&self, name: &str) -> RepositoryResult<Bytes> {
        let file_path = self.file_path(name);

        if !file_path.is_file() {
            return Err(RepositoryError::user(
                UserErrorKind::FileNotFound,
                "File does not exist.",
            ));
        }

        Ok(std::fs::read(file_path)?.into())
    }

    /// Every regular file under the working root outside the metadata directory, sorted
    pub fn list_files(&self) -> RepositoryResult<Vec<String>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.path)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| !(entry.depth() == 1 && entry.file_name() == METADATA_DIR));

        for entry in walker {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            if let Ok(relative_path) = entry.path().strip_prefix(self.path.as_ref()) {
                files.push(
                    relative_path
                        .components()
                        .map(|component| component.as_os_str().to_string_lossy())
                        .collect::<Vec<_>>()
                        .join("/"),
                );
            }
        }

        files.sort();
        Ok(files)
    }
}

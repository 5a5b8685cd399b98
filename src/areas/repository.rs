use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::stage::Stage;
use crate::areas::workspace::Workspace;
use crate::config::RepositoryConfig;
use crate::errors::{RepositoryError, RepositoryResult, UserErrorKind};
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Marker directory holding every piece of repository state
pub const METADATA_DIR: &str = ".gitlet";

const REFS_DIR: &str = "refs";

/// Handle on one repository, threaded through every operation
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    config: RepositoryConfig,
    database: Database,
    refs: Refs,
    stage: Stage,
    workspace: Workspace,
}

impl Repository {
    /// Open the repository rooted at `path`, with configuration read from the environment
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> RepositoryResult<Self> {
        Self::with_config(Path::new(path), writer, RepositoryConfig::load_from_env()?)
    }

    pub fn with_config(
        path: &Path,
        writer: Box<dyn std::io::Write>,
        config: RepositoryConfig,
    ) -> RepositoryResult<Self> {
        // the working root may not exist yet; only `init` creates it
        let path = if path.exists() {
            path.canonicalize()?
        } else {
            std::path::absolute(path)?
        };
        let metadata_path = path.join(METADATA_DIR);

        Ok(Repository {
            database: Database::new(metadata_path.clone().into_boxed_path()),
            refs: Refs::new(metadata_path.join(REFS_DIR).into_boxed_path()),
            stage: Stage::new(metadata_path.into_boxed_path()),
            workspace: Workspace::new(path.clone().into_boxed_path()),
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.path.join(METADATA_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        self.metadata_path().is_dir()
    }

    /// Fail with `NotInitialized` unless `init` has run here
    pub fn ensure_initialized(&self) -> RepositoryResult<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(RepositoryError::user(
                UserErrorKind::NotInitialized,
                "Not in an initialized Gitlet directory.",
            ))
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}

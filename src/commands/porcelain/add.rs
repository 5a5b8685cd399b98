use crate::areas::repository::Repository;
use crate::errors::RepositoryResult;

impl Repository {
    /// Stage the working copy of `file_path` for addition
    ///
    /// Re-adding replaces the staged content; a pending removal of the same file is dropped.
    pub fn add(&self, file_path: &str) -> RepositoryResult<()> {
        self.ensure_initialized()?;

        let name = self.workspace().normalize(file_path)?;
        let content = self.workspace().read_file(&name)?;

        self.stage().stage_for_addition(&name, &content)
    }
}

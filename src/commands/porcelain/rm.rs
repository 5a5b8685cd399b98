use crate::areas::repository::Repository;
use crate::errors::RepositoryResult;

impl Repository {
    /// Stage `file_path` for removal in the next commit
    ///
    /// The working file is left in place.
    pub fn rm(&self, file_path: &str) -> RepositoryResult<()> {
        self.ensure_initialized()?;

        let name = self.workspace().normalize(file_path)?;
        let content = self.workspace().read_file(&name)?;

        self.stage().stage_for_removal(&name, &content)
    }
}

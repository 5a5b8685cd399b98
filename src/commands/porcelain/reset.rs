use crate::areas::repository::Repository;
use crate::errors::RepositoryResult;

impl Repository {
    /// Drop the staged addition of `file_path`
    pub fn reset(&self, file_path: &str) -> RepositoryResult<()> {
        self.ensure_initialized()?;

        let name = self.workspace().normalize(file_path)?;
        self.stage().unstage(&name)
    }
}

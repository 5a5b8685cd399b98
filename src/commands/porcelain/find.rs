use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult, UserErrorKind};
use std::io::Write;

impl Repository {
    /// Ids of every stored commit whose message is exactly `message`
    pub fn find(&self, message: &str) -> RepositoryResult<Vec<ObjectId>> {
        let matches = self
            .global_log()?
            .into_iter()
            .filter(|entry| entry.commit.message() == message)
            .map(|entry| entry.oid)
            .collect::<Vec<_>>();

        if matches.is_empty() {
            return Err(RepositoryError::user(
                UserErrorKind::NotFound,
                "Found no commit with that message.",
            ));
        }

        Ok(matches)
    }

    pub fn show_find(&self, message: &str) -> RepositoryResult<()> {
        for oid in self.find(message)? {
            writeln!(self.writer(), "{oid}")?;
        }

        Ok(())
    }
}

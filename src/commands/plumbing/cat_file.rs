use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{RepositoryError, RepositoryResult, UserErrorKind};
use std::io::Write;

impl Repository {
    /// Print the stored blob or commit named by `object_id`
    pub fn cat_file(&self, object_id: &str) -> RepositoryResult<ObjectType> {
        self.ensure_initialized()?;

        let missing = || {
            RepositoryError::user(
                UserErrorKind::NotFound,
                format!("No object with id {object_id} exists."),
            )
        };
        let object_id = ObjectId::try_parse(object_id.to_string()).map_err(|_| missing())?;

        let (object_type, display) = if self.database().contains(ObjectType::Commit, &object_id) {
            let commit = self.database().load_commit(&object_id)?;
            (commit.object_type(), commit.display())
        } else if self.database().contains(ObjectType::Blob, &object_id) {
            let blob = self.database().load_blob(&object_id)?;
            (blob.object_type(), blob.display())
        } else {
            return Err(missing());
        };

        writeln!(self.writer(), "{display}")?;

        Ok(object_type)
    }
}

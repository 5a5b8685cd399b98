//! Object database
//!
//! Append-only, content-addressed storage for blobs and commits. Each object lives in its
//! own zlib-compressed file named by its id, under `blobs/` or `commits/`. Storing an object
//! that already exists is a no-op, and there is no update or delete.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{RepositoryError, RepositoryResult};
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

/// Outcome of [`Database::store`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stored {
    /// The object was written by this call
    New(ObjectId),
    /// An object with the same id was already present
    Existing(ObjectId),
}

impl Stored {
    pub fn oid(&self) -> &ObjectId {
        match self {
            Stored::New(oid) | Stored::Existing(oid) => oid,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Stored::New(_))
    }
}

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    /// `path` is the repository's metadata directory (`.gitlet`)
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn collection_path(&self, object_type: ObjectType) -> PathBuf {
        self.path.join(object_type.collection())
    }

    /// Create the empty `blobs/` and `commits/` collections
    pub fn create(&self) -> RepositoryResult<()> {
        std::fs::create_dir_all(self.collection_path(ObjectType::Blob))?;
        std::fs::create_dir_all(self.collection_path(ObjectType::Commit))?;

        Ok(())
    }

    pub fn store(&self, object: &impl Object) -> RepositoryResult<Stored> {
        let object_id = object.object_id().map_err(encoding_failure)?;
        let object_path = self.object_path(object.object_type(), &object_id);

        // write the object to disk unless it already exists
        if object_path.exists() {
            tracing::debug!(oid = %object_id, kind = %object.object_type(), "object already stored");
            return Ok(Stored::Existing(object_id));
        }

        let object_content = object.serialize().map_err(encoding_failure)?;
        self.write_object(&object_path, object_content)?;
        tracing::debug!(oid = %object_id, kind = %object.object_type(), "stored object");

        Ok(Stored::New(object_id))
    }

    pub fn contains(&self, object_type: ObjectType, object_id: &ObjectId) -> bool {
        self.object_path(object_type, object_id).is_file()
    }

    pub fn load_blob(&self, object_id: &ObjectId) -> RepositoryResult<Blob> {
        self.load(ObjectType::Blob, object_id)
    }

    pub fn load_commit(&self, object_id: &ObjectId) -> RepositoryResult<Commit> {
        self.load(ObjectType::Commit, object_id)
    }

    /// Every stored object id of the given type, ordered by id
    pub fn object_ids(&self, object_type: ObjectType) -> RepositoryResult<Vec<ObjectId>> {
        let collection = self.collection_path(object_type);
        let mut object_ids = Vec::new();

        for entry in std::fs::read_dir(&collection)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            // leftovers of an interrupted write are not objects
            let file_name = entry.file_name();
            if let Ok(oid) = ObjectId::try_parse(file_name.to_string_lossy().to_string()) {
                object_ids.push(oid);
            }
        }

        object_ids.sort();
        Ok(object_ids)
    }

    pub fn commit_ids(&self) -> RepositoryResult<Vec<ObjectId>> {
        self.object_ids(ObjectType::Commit)
    }

    pub fn blob_ids(&self) -> RepositoryResult<Vec<ObjectId>> {
        self.object_ids(ObjectType::Blob)
    }

    fn load<T: Object + Unpackable>(
        &self,
        object_type: ObjectType,
        object_id: &ObjectId,
    ) -> RepositoryResult<T> {
        let object_path = self.object_path(object_type, object_id);
        if !object_path.is_file() {
            return Err(RepositoryError::ObjectNotFound(object_id.clone()));
        }

        let object_content = self.read_object(&object_path)?;
        let mut object_reader = Cursor::new(object_content);

        let corrupt = |e: anyhow::Error| {
            RepositoryError::integrity(format!("{object_type} {object_id} is unreadable: {e:#}"))
        };

        let (stored_type, _) = ObjectType::parse_object_header(&mut object_reader).map_err(corrupt)?;
        if stored_type != object_type {
            return Err(RepositoryError::integrity(format!(
                "{object_id} is a {stored_type}, expected a {object_type}"
            )));
        }

        T::deserialize(object_reader).map_err(corrupt)
    }

    fn object_path(&self, object_type: ObjectType, object_id: &ObjectId) -> PathBuf {
        self.collection_path(object_type).join(object_id.as_ref())
    }

    fn read_object(&self, object_path: &Path) -> RepositoryResult<Bytes> {
        let object_content = std::fs::read(object_path)?;

        Self::decompress(object_content.into()).map_err(|e| {
            RepositoryError::integrity(format!(
                "unable to decompress object file {}: {e}",
                object_path.display()
            ))
        })
    }

    fn write_object(&self, object_path: &Path, object_content: Bytes) -> RepositoryResult<()> {
        let object_dir = object_path.parent().ok_or_else(|| {
            RepositoryError::integrity(format!("invalid object path {}", object_path.display()))
        })?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)?;
        file.write_all(&object_content)?;
        file.sync_all()?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, object_path)?;

        Ok(())
    }

    fn compress(data: Bytes) -> std::io::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(&data)?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
    }

    fn decompress(data: Bytes) -> std::io::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}

fn encoding_failure(e: anyhow::Error) -> RepositoryError {
    RepositoryError::integrity(format!("unable to encode object: {e:#}"))
}

//! Blob object
//!
//! A blob is one file's snapshot: its name relative to the working root and its raw bytes.
//! The name is part of the blob's identity, so the same content committed under two names
//! produces two blobs, while recommitting an unchanged file reuses the existing one.
//!
//! ## Format
//!
//! `blob <size>\0<name>\0<content>`

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    /// Path relative to the working root, `/`-separated
    name: String,
    content: Bytes,
}

impl Blob {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut content_bytes = Vec::with_capacity(self.name.len() + 1 + self.content.len());
        content_bytes.write_all(self.name.as_bytes())?;
        content_bytes.write_all(b"\0")?;
        content_bytes.write_all(&self.content)?;

        frame(self.object_type(), &content_bytes)
    }
}

impl Unpackable for Blob {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut name = Vec::new();
        reader
            .read_until(b'\0', &mut name)
            .context("Invalid blob object: unreadable name")?;
        if name.pop() != Some(b'\0') {
            anyhow::bail!("Invalid blob object: missing name terminator");
        }
        let name = String::from_utf8(name).context("Invalid blob object: name is not UTF-8")?;

        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;

        Ok(Self::new(name, content.into()))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn display(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

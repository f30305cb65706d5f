//! ZIP container assembly for OOXML packages.

use crate::error::Result;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A relationship entry for a .rels part.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path, relative to the owning part
    pub target: String,
}

/// Relationships serialized to a .rels part.
///
/// IDs are assigned sequentially in insertion order, so the same build
/// always produces the same part.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    entries: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its assigned ID.
    pub fn add(&mut self, rel_type: impl Into<String>, target: impl Into<String>) -> String {
        let id = format!("rId{}", self.entries.len() + 1);
        self.entries.push(Relationship {
            id: id.clone(),
            rel_type: rel_type.into(),
            target: target.into(),
        });
        id
    }

    /// Get the number of relationships.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to relationships XML.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n\
             <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">",
        );
        for rel in &self.entries {
            xml.push_str(&format!(
                "<Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"/>",
                rel.id, rel.rel_type, rel.target
            ));
        }
        xml.push_str("</Relationships>");
        xml
    }
}

/// OOXML package writer over a ZIP archive.
///
/// Parts are written in the order they are added. Entry timestamps are
/// pinned to the archive epoch so repeated builds produce identical
/// bytes.
pub struct OoxmlPackage {
    zip: ZipWriter<Cursor<Vec<u8>>>,
}

impl OoxmlPackage {
    /// Create a new empty package.
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    fn options() -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default())
    }

    /// Add a part (XML or binary) at the given package path.
    pub fn add_part(&mut self, path: &str, data: &[u8]) -> Result<()> {
        self.zip.start_file(path, Self::options())?;
        self.zip.write_all(data)?;
        Ok(())
    }

    /// Finish the archive and return the package bytes.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        let cursor = self.zip.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for OoxmlPackage {
    fn default() -> Self {
        Self::new()
    }
}

//! # manualgen
//!
//! DOCX manual generator for the Jeonbuk graduate network platform.
//!
//! This library assembles Word documents from an in-memory model —
//! headings, paragraphs, code blocks, lists, callouts, tables, and
//! embedded screenshots — and serializes the result to an Office Open
//! XML (.docx) package.
//!
//! ## Quick Start
//!
//! ```no_run
//! use manualgen::{save_docx, Document, HeadingLevel, Paragraph};
//!
//! let mut doc = Document::new();
//! doc.add_paragraph(Paragraph::heading(HeadingLevel::H1, "1장. 개요"));
//! doc.add_paragraph(Paragraph::with_text("본문 내용"));
//! save_docx(&doc, "output.docx")?;
//! # Ok::<(), manualgen::Error>(())
//! ```
//!
//! ## Manual Builders
//!
//! The two shipped generators live in [`manuals`]:
//!
//! ```no_run
//! use manualgen::manuals::{dev, user};
//! use std::path::Path;
//!
//! let dev_manual = dev::build();
//! let user_manual = user::build(Path::new("manual-screenshots"));
//! # let _ = (dev_manual, user_manual);
//! ```

pub mod container;
pub mod docx;
pub mod error;
pub mod manuals;
pub mod model;

// Re-exports
pub use container::{OoxmlPackage, Relationship, Relationships};
pub use docx::DocxWriter;
pub use error::{Error, Result};
pub use model::{
    Block, Cell, Document, HeadingLevel, ImageResource, ListInfo, ListType, Metadata, PageSetup,
    Paragraph, Row, Table, TextAlignment, TextRun, TextStyle,
};

use std::path::Path;

/// Serialize a document to .docx bytes.
pub fn to_docx_bytes(doc: &Document) -> Result<Vec<u8>> {
    DocxWriter::new(doc).to_bytes()
}

/// Serialize a document and save it to a file.
///
/// The file is overwritten if it already exists.
pub fn save_docx(doc: &Document, path: impl AsRef<Path>) -> Result<()> {
    DocxWriter::new(doc).save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_docx_bytes_is_zip() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("hello"));
        let bytes = to_docx_bytes(&doc).unwrap();
        // ZIP local file header magic
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn test_save_docx_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");

        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("first"));
        save_docx(&doc, &path).unwrap();
        let first_len = std::fs::metadata(&path).unwrap().len();

        doc.add_paragraph(Paragraph::with_text("second build adds content"));
        save_docx(&doc, &path).unwrap();
        let second_len = std::fs::metadata(&path).unwrap().len();

        assert!(second_len > first_len);
    }
}

//! DOCX (Word) document serialization.
//!
//! This module serializes the document model to the Office Open XML
//! (.docx) package format.

mod numbering;
mod styles;
mod writer;

pub use writer::DocxWriter;

//! In-memory document model.
//!
//! This module defines the data structures a manual builder assembles
//! before serialization. The model is write-oriented: builders create
//! paragraphs, tables, and image blocks top-to-bottom, and the docx
//! writer serializes the finished tree to WordprocessingML.

mod document;
mod paragraph;
mod resource;
mod table;
mod units;

pub use document::*;
pub use paragraph::*;
pub use resource::*;
pub use table::*;
pub use units::*;

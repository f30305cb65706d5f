//! Document model structures.

use super::units::cm_to_twips;
use super::{ImageResource, Paragraph, Table};
use serde::{Deserialize, Serialize};

/// Document metadata written to docProps/core.xml.
///
/// All fields are literal strings so repeated builds serialize
/// identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document author/creator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Document subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Creation date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// Last modification date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

/// Page size and margins written to the body `sectPr`, in twips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSetup {
    pub width: u32,
    pub height: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub margin_right: u32,
}

impl Default for PageSetup {
    /// A4 portrait with 2.54cm margins.
    fn default() -> Self {
        Self {
            width: 11_906,
            height: 16_838,
            margin_top: 1_440,
            margin_bottom: 1_440,
            margin_left: 1_440,
            margin_right: 1_440,
        }
    }
}

impl PageSetup {
    /// Set all four margins in centimeters.
    pub fn with_margins_cm(mut self, top: f32, bottom: f32, left: f32, right: f32) -> Self {
        self.margin_top = cm_to_twips(top);
        self.margin_bottom = cm_to_twips(bottom);
        self.margin_left = cm_to_twips(left);
        self.margin_right = cm_to_twips(right);
        self
    }
}

/// A content block within the document body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    /// A paragraph of text
    Paragraph(Paragraph),
    /// A table
    Table(Table),
    /// A page break
    PageBreak,
    /// A centered embedded image
    Image {
        /// Index into the document's resource list
        resource: usize,
        /// Display width in EMUs
        width: u32,
        /// Display height in EMUs
        height: u32,
    },
}

/// A document being assembled for serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata
    pub metadata: Metadata,

    /// Page size and margins
    #[serde(default)]
    pub page: PageSetup,

    /// Content blocks, emitted in order
    #[serde(default)]
    pub content: Vec<Block>,

    /// Embedded image resources, in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ImageResource>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a content block.
    pub fn add_block(&mut self, block: Block) {
        self.content.push(block);
    }

    /// Add a paragraph.
    pub fn add_paragraph(&mut self, para: Paragraph) {
        self.content.push(Block::Paragraph(para));
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.content.push(Block::Table(table));
    }

    /// Add a page break.
    pub fn page_break(&mut self) {
        self.content.push(Block::PageBreak);
    }

    /// Add an image resource and return its index for `Block::Image`.
    pub fn add_image(&mut self, resource: ImageResource) -> usize {
        self.resources.push(resource);
        self.resources.len() - 1
    }

    /// Embed an image scaled to a target width, as a centered block.
    pub fn embed_image(&mut self, resource: ImageResource, width_emu: u32) {
        let (width, height) = resource.scaled_to_width(width_emu);
        let index = self.add_image(resource);
        self.content.push(Block::Image {
            resource: index,
            width,
            height,
        });
    }

    /// Get the total number of content blocks.
    pub fn total_blocks(&self) -> usize {
        self.content.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Iterate over all tables in the document.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.content.iter().filter_map(|b| match b {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    /// Iterate over all paragraphs in the document.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.content.iter().filter_map(|b| match b {
            Block::Paragraph(para) => Some(para),
            _ => None,
        })
    }

    /// Get the text of every heading paragraph, in order.
    pub fn heading_texts(&self) -> Vec<String> {
        self.paragraphs()
            .filter(|p| p.is_heading())
            .map(|p| p.plain_text())
            .collect()
    }

    /// Extract all text content as a single string.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for block in &self.content {
            match block {
                Block::Paragraph(para) => {
                    text.push_str(&para.plain_text());
                    text.push('\n');
                }
                Block::Table(table) => {
                    text.push_str(&table.plain_text());
                    text.push('\n');
                }
                _ => {}
            }
        }
        text.trim().to_string()
    }

    /// Convert to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingLevel, TextRun, TextStyle};

    #[test]
    fn test_document_creation() {
        let mut doc = Document::new();
        assert!(doc.is_empty());

        doc.add_paragraph(Paragraph::with_text("Hello, World!"));
        assert!(!doc.is_empty());
        assert_eq!(doc.total_blocks(), 1);
    }

    #[test]
    fn test_plain_text_extraction() {
        let mut doc = Document::new();
        let mut para = Paragraph::with_text("Hello, ");
        para.add_run(TextRun::styled("World", TextStyle::new().bold()));
        para.add_run(TextRun::plain("!"));
        doc.add_paragraph(para);

        assert_eq!(doc.plain_text(), "Hello, World!");
    }

    #[test]
    fn test_heading_texts() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::heading(HeadingLevel::H1, "1장"));
        doc.add_paragraph(Paragraph::with_text("본문"));
        doc.add_paragraph(Paragraph::heading(HeadingLevel::H2, "1.1"));

        assert_eq!(doc.heading_texts(), vec!["1장", "1.1"]);
    }

    #[test]
    fn test_page_setup_margins() {
        let page = PageSetup::default().with_margins_cm(2.5, 2.5, 3.0, 2.5);
        assert_eq!(page.margin_top, 1417);
        assert_eq!(page.margin_left, 1701);
    }

    #[test]
    fn test_metadata_serialization() {
        let meta = Metadata {
            title: Some("Test Document".to_string()),
            author: Some("Test Author".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("Test Document"));
        // Empty fields should not be serialized
        assert!(!json.contains("subject"));
    }
}

//! Paragraph and text run models.

use super::units::{cm_to_twips, half_points, pt_to_twentieths};
use serde::{Deserialize, Serialize};

/// Text alignment within a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Heading level applied through a paragraph style.
///
/// `Title` maps to the `Title` style used on cover pages; `H1`-`H3`
/// map to `Heading1`-`Heading3`. The manuals never go deeper than three
/// levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    #[default]
    None,
    Title,
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Check if this is a heading (not None).
    pub fn is_heading(&self) -> bool {
        !matches!(self, HeadingLevel::None)
    }

    pub(crate) fn is_none(&self) -> bool {
        matches!(self, HeadingLevel::None)
    }
}

/// List type for paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// Unordered (bulleted) list
    Bullet,
    /// Ordered (numbered) list
    Numbered,
}

/// List information for a paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListInfo {
    /// Type of list
    pub list_type: ListType,
    /// Nesting level (0 = top level)
    pub level: u8,
}

/// Text style properties applied to a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,

    /// Italic text
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,

    /// Font name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,

    /// Font size in half-points (e.g., 21 = 10.5pt)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Text color (hex, e.g., "1E40AF")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TextStyle {
    /// Create a new default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the style bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Make the style italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set the font name.
    pub fn font(mut self, name: impl Into<String>) -> Self {
        self.font = Some(name.into());
        self
    }

    /// Set the font size in points.
    pub fn size_pt(mut self, pt: f32) -> Self {
        self.size = Some(half_points(pt));
        self
    }

    /// Set the text color from a hex string without the leading `#`.
    pub fn color(mut self, hex: impl Into<String>) -> Self {
        self.color = Some(hex.into());
        self
    }

    /// Check if the style has any formatting.
    pub fn has_formatting(&self) -> bool {
        self.bold || self.italic || self.font.is_some() || self.size.is_some() || self.color.is_some()
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: TextStyle,
}

fn is_default_style(style: &TextStyle) -> bool {
    *style == TextStyle::default()
}

impl TextRun {
    /// Create a plain text run with no styling.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a styled text run.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A paragraph of text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in this paragraph
    #[serde(default)]
    pub runs: Vec<TextRun>,

    /// Heading level
    #[serde(default, skip_serializing_if = "HeadingLevel::is_none")]
    pub heading: HeadingLevel,

    /// Text alignment
    #[serde(default, skip_serializing_if = "is_default_alignment")]
    pub alignment: TextAlignment,

    /// List information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<ListInfo>,

    /// Spacing before the paragraph in twentieths of a point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_before: Option<u32>,

    /// Spacing after the paragraph in twentieths of a point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_after: Option<u32>,

    /// Left indent in twips
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_left: Option<u32>,

    /// Background shading fill (hex, e.g., "F1F5F9")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shading: Option<String>,
}

fn is_default_alignment(a: &TextAlignment) -> bool {
    *a == TextAlignment::Left
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![TextRun::plain(text)],
            ..Default::default()
        }
    }

    /// Create a paragraph with one styled run.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            runs: vec![TextRun::styled(text, style)],
            ..Default::default()
        }
    }

    /// Create a heading paragraph.
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            runs: vec![TextRun::plain(text)],
            heading: level,
            ..Default::default()
        }
    }

    /// Set the alignment.
    pub fn aligned(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Apply a heading style.
    pub fn with_heading(mut self, level: HeadingLevel) -> Self {
        self.heading = level;
        self
    }

    /// Mark the paragraph as a bulleted list item.
    pub fn bulleted(mut self) -> Self {
        self.list = Some(ListInfo {
            list_type: ListType::Bullet,
            level: 0,
        });
        self
    }

    /// Mark the paragraph as a numbered list item.
    pub fn numbered(mut self) -> Self {
        self.list = Some(ListInfo {
            list_type: ListType::Numbered,
            level: 0,
        });
        self
    }

    /// Set the spacing before the paragraph in points.
    pub fn space_before_pt(mut self, pt: f32) -> Self {
        self.spacing_before = Some(pt_to_twentieths(pt));
        self
    }

    /// Set the spacing after the paragraph in points.
    pub fn space_after_pt(mut self, pt: f32) -> Self {
        self.spacing_after = Some(pt_to_twentieths(pt));
        self
    }

    /// Set the left indent in centimeters.
    pub fn indent_cm(mut self, cm: f32) -> Self {
        self.indent_left = Some(cm_to_twips(cm));
        self
    }

    /// Set the background shading fill from a hex string.
    pub fn shaded(mut self, fill: impl Into<String>) -> Self {
        self.shading = Some(fill.into());
        self
    }

    /// Add a text run to this paragraph.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Get the plain text content.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if this paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty() || self.runs.iter().all(|r| r.is_empty())
    }

    /// Check if this paragraph is a heading.
    pub fn is_heading(&self) -> bool {
        self.heading.is_heading()
    }

    /// Check if this paragraph is a list item.
    pub fn is_list_item(&self) -> bool {
        self.list.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level() {
        assert!(HeadingLevel::H1.is_heading());
        assert!(HeadingLevel::Title.is_heading());
        assert!(!HeadingLevel::None.is_heading());
    }

    #[test]
    fn test_text_style_builder() {
        let style = TextStyle::new().bold().size_pt(10.5).color("6B7280");
        assert!(style.bold);
        assert_eq!(style.size, Some(21));
        assert_eq!(style.color.as_deref(), Some("6B7280"));
        assert!(style.has_formatting());

        assert!(!TextStyle::default().has_formatting());
    }

    #[test]
    fn test_paragraph() {
        let para = Paragraph::with_text("Hello, World!");
        assert_eq!(para.plain_text(), "Hello, World!");
        assert!(!para.is_heading());
        assert!(!para.is_empty());

        let heading = Paragraph::heading(HeadingLevel::H1, "Title");
        assert!(heading.is_heading());
    }

    #[test]
    fn test_list_builders() {
        let bullet = Paragraph::with_text("item").bulleted();
        assert!(bullet.is_list_item());
        assert_eq!(bullet.list.as_ref().unwrap().list_type, ListType::Bullet);

        let step = Paragraph::with_text("1. step").numbered();
        assert_eq!(step.list.as_ref().unwrap().list_type, ListType::Numbered);
    }

    #[test]
    fn test_spacing_and_indent() {
        let para = Paragraph::with_text("code")
            .indent_cm(0.8)
            .space_before_pt(4.0)
            .space_after_pt(4.0)
            .shaded("F1F5F9");
        assert_eq!(para.indent_left, Some(454));
        assert_eq!(para.spacing_before, Some(80));
        assert_eq!(para.shading.as_deref(), Some("F1F5F9"));
    }

    #[test]
    fn test_paragraph_serialization() {
        let para = Paragraph::with_text("Test");
        let json = serde_json::to_string(&para).unwrap();
        // Default values should not be serialized
        assert!(!json.contains("heading"));
        assert!(!json.contains("alignment"));
    }
}

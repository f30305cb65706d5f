//! DOCX writer implementation.

use crate::container::{OoxmlPackage, Relationships};
use crate::error::{Error, Result};
use crate::model::{Block, Document, HeadingLevel, ListType, Paragraph, Table, TextAlignment, TextRun, TextStyle};

use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::path::Path;

use super::numbering;
use super::styles;

const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_PIC: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_APP_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const REL_NUMBERING: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
const REL_IMAGE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Writer serializing a [`Document`] to a .docx package.
pub struct DocxWriter<'a> {
    document: &'a Document,
}

impl<'a> DocxWriter<'a> {
    /// Create a writer for the given document.
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Serialize the document to .docx bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let (document_xml, document_rels) = self.document_part()?;

        let mut package = OoxmlPackage::new();
        package.add_part("[Content_Types].xml", content_types().as_bytes())?;
        package.add_part("_rels/.rels", package_relationships().to_xml().as_bytes())?;
        package.add_part("docProps/core.xml", self.core_properties().as_bytes())?;
        package.add_part("docProps/app.xml", app_properties().as_bytes())?;
        package.add_part("word/document.xml", &document_xml)?;
        package.add_part(
            "word/_rels/document.xml.rels",
            document_rels.to_xml().as_bytes(),
        )?;
        package.add_part("word/styles.xml", styles::styles_xml().as_bytes())?;
        package.add_part("word/numbering.xml", numbering::numbering_xml().as_bytes())?;

        for (index, resource) in self.document.resources.iter().enumerate() {
            package.add_part(&media_path(index), &resource.data)?;
        }

        package.into_bytes()
    }

    /// Serialize and write the document to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Build word/document.xml and its relationships part.
    fn document_part(&self) -> Result<(Vec<u8>, Relationships)> {
        let mut rels = Relationships::new();
        rels.add(REL_STYLES, "styles.xml");
        rels.add(REL_NUMBERING, "numbering.xml");
        let image_rel_ids: Vec<String> = (0..self.document.resources.len())
            .map(|index| rels.add(REL_IMAGE, format!("media/image{}.png", index + 1)))
            .collect();

        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

        let mut root = BytesStart::new("w:document");
        root.push_attribute(("xmlns:w", NS_W));
        root.push_attribute(("xmlns:r", NS_R));
        root.push_attribute(("xmlns:wp", NS_WP));
        writer.write_event(Event::Start(root))?;
        write_start(&mut writer, "w:body", &[])?;

        let page = &self.document.page;
        let content_width = page
            .width
            .saturating_sub(page.margin_left + page.margin_right);

        for block in &self.document.content {
            match block {
                Block::Paragraph(para) => write_paragraph(&mut writer, para)?,
                Block::Table(table) => write_table(&mut writer, table, content_width)?,
                Block::PageBreak => write_page_break(&mut writer)?,
                Block::Image {
                    resource,
                    width,
                    height,
                } => {
                    let rel_id = image_rel_ids.get(*resource).ok_or_else(|| {
                        Error::MissingResource(format!("image {resource}"))
                    })?;
                    write_image(&mut writer, rel_id, *resource, *width, *height)?;
                }
            }
        }

        self.write_section_properties(&mut writer)?;
        write_end(&mut writer, "w:body")?;
        write_end(&mut writer, "w:document")?;

        Ok((writer.into_inner(), rels))
    }

    fn write_section_properties(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        let page = &self.document.page;
        write_start(writer, "w:sectPr", &[])?;
        write_empty(
            writer,
            "w:pgSz",
            &[
                ("w:w", page.width.to_string().as_str()),
                ("w:h", page.height.to_string().as_str()),
            ],
        )?;
        write_empty(
            writer,
            "w:pgMar",
            &[
                ("w:top", page.margin_top.to_string().as_str()),
                ("w:right", page.margin_right.to_string().as_str()),
                ("w:bottom", page.margin_bottom.to_string().as_str()),
                ("w:left", page.margin_left.to_string().as_str()),
                ("w:header", "708"),
                ("w:footer", "708"),
                ("w:gutter", "0"),
            ],
        )?;
        write_end(writer, "w:sectPr")
    }

    /// Build docProps/core.xml from the document metadata.
    fn core_properties(&self) -> String {
        let meta = &self.document.metadata;
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n\
             <cp:coreProperties \
             xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
             xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
             xmlns:dcterms=\"http://purl.org/dc/terms/\" \
             xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">",
        );
        if let Some(title) = &meta.title {
            xml.push_str(&format!("<dc:title>{}</dc:title>", escape(title)));
        }
        if let Some(subject) = &meta.subject {
            xml.push_str(&format!("<dc:subject>{}</dc:subject>", escape(subject)));
        }
        if let Some(author) = &meta.author {
            xml.push_str(&format!("<dc:creator>{}</dc:creator>", escape(author)));
        }
        if let Some(created) = &meta.created {
            xml.push_str(&format!(
                "<dcterms:created xsi:type=\"dcterms:W3CDTF\">{}</dcterms:created>",
                escape(created)
            ));
        }
        if let Some(modified) = &meta.modified {
            xml.push_str(&format!(
                "<dcterms:modified xsi:type=\"dcterms:W3CDTF\">{}</dcterms:modified>",
                escape(modified)
            ));
        }
        xml.push_str("</cp:coreProperties>");
        xml
    }
}

fn media_path(index: usize) -> String {
    format!("word/media/image{}.png", index + 1)
}

fn content_types() -> String {
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n\
     <Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
     <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
     <Default Extension=\"xml\" ContentType=\"application/xml\"/>\
     <Default Extension=\"png\" ContentType=\"image/png\"/>\
     <Override PartName=\"/word/document.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml\"/>\
     <Override PartName=\"/word/styles.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml\"/>\
     <Override PartName=\"/word/numbering.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml\"/>\
     <Override PartName=\"/docProps/core.xml\" ContentType=\"application/vnd.openxmlformats-package.core-properties+xml\"/>\
     <Override PartName=\"/docProps/app.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.extended-properties+xml\"/>\
     </Types>"
        .to_string()
}

fn package_relationships() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(REL_OFFICE_DOCUMENT, "word/document.xml");
    rels.add(REL_CORE_PROPS, "docProps/core.xml");
    rels.add(REL_APP_PROPS, "docProps/app.xml");
    rels
}

fn app_properties() -> String {
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n\
     <Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\">\
     <Application>manualgen</Application>\
     </Properties>"
        .to_string()
}

fn write_start(writer: &mut Writer<Vec<u8>>, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut element = BytesStart::new(name);
    for (key, value) in attrs {
        element.push_attribute((*key, *value));
    }
    writer.write_event(Event::Start(element))?;
    Ok(())
}

fn write_empty(writer: &mut Writer<Vec<u8>>, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut element = BytesStart::new(name);
    for (key, value) in attrs {
        element.push_attribute((*key, *value));
    }
    writer.write_event(Event::Empty(element))?;
    Ok(())
}

fn write_end(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn paragraph_style_id(para: &Paragraph) -> Option<&'static str> {
    match para.heading {
        HeadingLevel::Title => Some("Title"),
        HeadingLevel::H1 => Some("Heading1"),
        HeadingLevel::H2 => Some("Heading2"),
        HeadingLevel::H3 => Some("Heading3"),
        HeadingLevel::None => para.list.as_ref().map(|list| match list.list_type {
            ListType::Bullet => "ListBullet",
            ListType::Numbered => "ListNumber",
        }),
    }
}

fn alignment_value(alignment: TextAlignment) -> Option<&'static str> {
    match alignment {
        TextAlignment::Left => None,
        TextAlignment::Center => Some("center"),
        TextAlignment::Right => Some("right"),
        TextAlignment::Justify => Some("both"),
    }
}

fn write_paragraph(writer: &mut Writer<Vec<u8>>, para: &Paragraph) -> Result<()> {
    write_start(writer, "w:p", &[])?;
    write_paragraph_properties(writer, para)?;
    for run in &para.runs {
        write_run(writer, run)?;
    }
    write_end(writer, "w:p")
}

fn write_paragraph_properties(writer: &mut Writer<Vec<u8>>, para: &Paragraph) -> Result<()> {
    let style_id = paragraph_style_id(para);
    let alignment = alignment_value(para.alignment);

    let has_properties = style_id.is_some()
        || para.list.is_some()
        || para.shading.is_some()
        || para.spacing_before.is_some()
        || para.spacing_after.is_some()
        || para.indent_left.is_some()
        || alignment.is_some();
    if !has_properties {
        return Ok(());
    }

    write_start(writer, "w:pPr", &[])?;
    if let Some(id) = style_id {
        write_empty(writer, "w:pStyle", &[("w:val", id)])?;
    }
    if let Some(list) = &para.list {
        write_start(writer, "w:numPr", &[])?;
        write_empty(writer, "w:ilvl", &[("w:val", list.level.to_string().as_str())])?;
        let num_id = match list.list_type {
            ListType::Bullet => "1",
            ListType::Numbered => "2",
        };
        write_empty(writer, "w:numId", &[("w:val", num_id)])?;
        write_end(writer, "w:numPr")?;
    }
    if let Some(fill) = &para.shading {
        write_empty(
            writer,
            "w:shd",
            &[("w:val", "clear"), ("w:color", "auto"), ("w:fill", fill)],
        )?;
    }
    if para.spacing_before.is_some() || para.spacing_after.is_some() {
        let before = para.spacing_before.map(|v| v.to_string());
        let after = para.spacing_after.map(|v| v.to_string());
        let mut attrs: Vec<(&str, &str)> = Vec::new();
        if let Some(value) = &before {
            attrs.push(("w:before", value));
        }
        if let Some(value) = &after {
            attrs.push(("w:after", value));
        }
        write_empty(writer, "w:spacing", &attrs)?;
    }
    if let Some(indent) = para.indent_left {
        write_empty(writer, "w:ind", &[("w:left", indent.to_string().as_str())])?;
    }
    if let Some(value) = alignment {
        write_empty(writer, "w:jc", &[("w:val", value)])?;
    }
    write_end(writer, "w:pPr")
}

fn write_run(writer: &mut Writer<Vec<u8>>, run: &TextRun) -> Result<()> {
    write_start(writer, "w:r", &[])?;
    write_run_properties(writer, &run.style)?;

    // Embedded newlines become explicit line breaks.
    let mut first = true;
    for segment in run.text.split('\n') {
        if !first {
            write_empty(writer, "w:br", &[])?;
        }
        first = false;
        if !segment.is_empty() {
            write_start(writer, "w:t", &[("xml:space", "preserve")])?;
            writer.write_event(Event::Text(BytesText::new(segment)))?;
            write_end(writer, "w:t")?;
        }
    }
    write_end(writer, "w:r")
}

fn write_run_properties(writer: &mut Writer<Vec<u8>>, style: &TextStyle) -> Result<()> {
    if !style.has_formatting() {
        return Ok(());
    }
    write_start(writer, "w:rPr", &[])?;
    if let Some(font) = &style.font {
        write_empty(
            writer,
            "w:rFonts",
            &[("w:ascii", font.as_str()), ("w:hAnsi", font.as_str())],
        )?;
    }
    if style.bold {
        write_empty(writer, "w:b", &[])?;
    }
    if style.italic {
        write_empty(writer, "w:i", &[])?;
    }
    if let Some(color) = &style.color {
        write_empty(writer, "w:color", &[("w:val", color.as_str())])?;
    }
    if let Some(size) = style.size {
        let value = size.to_string();
        write_empty(writer, "w:sz", &[("w:val", value.as_str())])?;
        write_empty(writer, "w:szCs", &[("w:val", value.as_str())])?;
    }
    write_end(writer, "w:rPr")
}

fn write_page_break(writer: &mut Writer<Vec<u8>>) -> Result<()> {
    write_start(writer, "w:p", &[])?;
    write_start(writer, "w:r", &[])?;
    write_empty(writer, "w:br", &[("w:type", "page")])?;
    write_end(writer, "w:r")?;
    write_end(writer, "w:p")
}

fn write_table(writer: &mut Writer<Vec<u8>>, table: &Table, content_width: u32) -> Result<()> {
    write_start(writer, "w:tbl", &[])?;

    write_start(writer, "w:tblPr", &[])?;
    if let Some(style) = &table.style_id {
        write_empty(writer, "w:tblStyle", &[("w:val", style.as_str())])?;
    }
    write_empty(writer, "w:tblW", &[("w:w", "0"), ("w:type", "auto")])?;
    write_empty(
        writer,
        "w:tblLook",
        &[
            ("w:val", "04A0"),
            ("w:firstRow", "1"),
            ("w:lastRow", "0"),
            ("w:firstColumn", "0"),
            ("w:lastColumn", "0"),
            ("w:noHBand", "0"),
            ("w:noVBand", "1"),
        ],
    )?;
    write_end(writer, "w:tblPr")?;

    let columns = table.column_count().max(1);
    let column_width = (content_width / columns as u32).to_string();
    write_start(writer, "w:tblGrid", &[])?;
    for _ in 0..columns {
        write_empty(writer, "w:gridCol", &[("w:w", column_width.as_str())])?;
    }
    write_end(writer, "w:tblGrid")?;

    for row in &table.rows {
        write_start(writer, "w:tr", &[])?;
        if row.is_header {
            write_start(writer, "w:trPr", &[])?;
            write_empty(writer, "w:tblHeader", &[])?;
            write_end(writer, "w:trPr")?;
        }
        for cell in &row.cells {
            write_start(writer, "w:tc", &[])?;
            write_start(writer, "w:tcPr", &[])?;
            write_empty(
                writer,
                "w:tcW",
                &[("w:w", column_width.as_str()), ("w:type", "dxa")],
            )?;
            write_end(writer, "w:tcPr")?;
            if cell.content.is_empty() {
                // A table cell must contain at least one paragraph.
                write_empty(writer, "w:p", &[])?;
            } else {
                for para in &cell.content {
                    write_paragraph(writer, para)?;
                }
            }
            write_end(writer, "w:tc")?;
        }
        write_end(writer, "w:tr")?;
    }

    write_end(writer, "w:tbl")
}

fn write_image(
    writer: &mut Writer<Vec<u8>>,
    rel_id: &str,
    index: usize,
    width: u32,
    height: u32,
) -> Result<()> {
    let id = (index + 1).to_string();
    let name = format!("image{}.png", index + 1);
    let cx = width.to_string();
    let cy = height.to_string();

    write_start(writer, "w:p", &[])?;
    write_start(writer, "w:pPr", &[])?;
    write_empty(writer, "w:jc", &[("w:val", "center")])?;
    write_end(writer, "w:pPr")?;
    write_start(writer, "w:r", &[])?;
    write_start(writer, "w:drawing", &[])?;
    write_start(
        writer,
        "wp:inline",
        &[("distT", "0"), ("distB", "0"), ("distL", "0"), ("distR", "0")],
    )?;
    write_empty(writer, "wp:extent", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    write_empty(
        writer,
        "wp:docPr",
        &[("id", id.as_str()), ("name", name.as_str())],
    )?;
    write_start(writer, "a:graphic", &[("xmlns:a", NS_A)])?;
    write_start(writer, "a:graphicData", &[("uri", NS_PIC)])?;
    write_start(writer, "pic:pic", &[("xmlns:pic", NS_PIC)])?;
    write_start(writer, "pic:nvPicPr", &[])?;
    write_empty(
        writer,
        "pic:cNvPr",
        &[("id", id.as_str()), ("name", name.as_str())],
    )?;
    write_empty(writer, "pic:cNvPicPr", &[])?;
    write_end(writer, "pic:nvPicPr")?;
    write_start(writer, "pic:blipFill", &[])?;
    write_empty(writer, "a:blip", &[("r:embed", rel_id)])?;
    write_start(writer, "a:stretch", &[])?;
    write_empty(writer, "a:fillRect", &[])?;
    write_end(writer, "a:stretch")?;
    write_end(writer, "pic:blipFill")?;
    write_start(writer, "pic:spPr", &[])?;
    write_start(writer, "a:xfrm", &[])?;
    write_empty(writer, "a:off", &[("x", "0"), ("y", "0")])?;
    write_empty(writer, "a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    write_end(writer, "a:xfrm")?;
    write_start(writer, "a:prstGeom", &[("prst", "rect")])?;
    write_empty(writer, "a:avLst", &[])?;
    write_end(writer, "a:prstGeom")?;
    write_end(writer, "pic:spPr")?;
    write_end(writer, "pic:pic")?;
    write_end(writer, "a:graphicData")?;
    write_end(writer, "a:graphic")?;
    write_end(writer, "wp:inline")?;
    write_end(writer, "w:drawing")?;
    write_end(writer, "w:r")?;
    write_end(writer, "w:p")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, ImageResource, Metadata, Row};
    use std::io::{Cursor, Read};

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        data.extend_from_slice(&13u32.to_be_bytes());
        data.extend_from_slice(b"IHDR");
        data.extend_from_slice(&width.to_be_bytes());
        data.extend_from_slice(&height.to_be_bytes());
        data
    }

    #[test]
    fn test_minimal_document_has_required_parts() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("본문"));
        let bytes = DocxWriter::new(&doc).to_bytes().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.clone())).unwrap();
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "docProps/app.xml",
            "word/document.xml",
            "word/_rels/document.xml.rels",
            "word/styles.xml",
            "word/numbering.xml",
        ] {
            assert!(archive.by_name(part).is_ok(), "missing part {part}");
        }
    }

    #[test]
    fn test_text_is_escaped() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("a < b && c > d"));
        let bytes = DocxWriter::new(&doc).to_bytes().unwrap();
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("a &lt; b &amp;&amp; c &gt; d"));
    }

    #[test]
    fn test_newlines_become_breaks() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("line one\nline two"));
        let bytes = DocxWriter::new(&doc).to_bytes().unwrap();
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("<w:br/>"));
        assert!(xml.contains("line one"));
        assert!(xml.contains("line two"));
    }

    #[test]
    fn test_list_paragraph_properties() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("item").bulleted());
        doc.add_paragraph(Paragraph::with_text("1. step").numbered());
        let bytes = DocxWriter::new(&doc).to_bytes().unwrap();
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("<w:pStyle w:val=\"ListBullet\"/>"));
        assert!(xml.contains("<w:pStyle w:val=\"ListNumber\"/>"));
        assert!(xml.contains("<w:numId w:val=\"1\"/>"));
        assert!(xml.contains("<w:numId w:val=\"2\"/>"));
    }

    #[test]
    fn test_shaded_code_block() {
        let mut doc = Document::new();
        doc.add_paragraph(
            Paragraph::styled("npm install", TextStyle::new().font("Courier New").size_pt(9.5))
                .shaded("F1F5F9")
                .indent_cm(0.8),
        );
        let bytes = DocxWriter::new(&doc).to_bytes().unwrap();
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("w:fill=\"F1F5F9\""));
        assert!(xml.contains("w:ascii=\"Courier New\""));
        assert!(xml.contains("<w:sz w:val=\"19\"/>"));
    }

    #[test]
    fn test_table_serialization() {
        let mut doc = Document::new();
        let mut table = Table::with_style("LightShadingAccent1");
        table.add_row(Row::header(vec![Cell::header("Method"), Cell::header("Endpoint")]));
        table.add_row(Row::from_cells(vec![
            Cell::with_text("GET"),
            Cell::with_text("/api/health"),
        ]));
        doc.add_table(table);

        let bytes = DocxWriter::new(&doc).to_bytes().unwrap();
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("<w:tblStyle w:val=\"LightShadingAccent1\"/>"));
        assert_eq!(xml.matches("<w:tr>").count(), 2);
        assert_eq!(xml.matches("<w:gridCol").count(), 2);
        assert!(xml.contains("/api/health"));
    }

    #[test]
    fn test_image_embedding() {
        let mut doc = Document::new();
        let resource = ImageResource::from_png_bytes(png_bytes(200, 100)).unwrap();
        doc.embed_image(resource, 914_400);

        let bytes = DocxWriter::new(&doc).to_bytes().unwrap();
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("<wp:extent cx=\"914400\" cy=\"457200\"/>"));
        assert!(xml.contains("r:embed=\"rId3\""));

        let rels = read_part(&bytes, "word/_rels/document.xml.rels");
        assert!(rels.contains("Target=\"media/image1.png\""));

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(archive.by_name("word/media/image1.png").is_ok());
    }

    #[test]
    fn test_page_break() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("before"));
        doc.page_break();
        doc.add_paragraph(Paragraph::with_text("after"));
        let bytes = DocxWriter::new(&doc).to_bytes().unwrap();
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("<w:br w:type=\"page\"/>"));
    }

    #[test]
    fn test_core_properties_metadata() {
        let mut doc = Document::new();
        doc.metadata = Metadata {
            title: Some("사용자 매뉴얼".to_string()),
            author: Some("IT팀".to_string()),
            created: Some("2026-02-26T00:00:00Z".to_string()),
            ..Default::default()
        };
        let bytes = DocxWriter::new(&doc).to_bytes().unwrap();
        let xml = read_part(&bytes, "docProps/core.xml");
        assert!(xml.contains("<dc:title>사용자 매뉴얼</dc:title>"));
        assert!(xml.contains("<dc:creator>IT팀</dc:creator>"));
        assert!(xml.contains("2026-02-26T00:00:00Z"));
    }

    #[test]
    fn test_section_properties() {
        let mut doc = Document::new();
        doc.page = doc.page.with_margins_cm(2.5, 2.5, 3.0, 2.5);
        let bytes = DocxWriter::new(&doc).to_bytes().unwrap();
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("w:left=\"1701\""));
        assert!(xml.contains("<w:pgSz w:w=\"11906\" w:h=\"16838\"/>"));
    }
}

//! DOCX style definitions.
//!
//! Generates word/styles.xml with the fixed style set the manuals rely
//! on: Normal, Title, Heading1-3, the two list styles, and the
//! "Light Shading Accent 1" table style. The manuals apply their exact
//! colors and sizes through direct run formatting, so the style sheet
//! only has to carry sensible structural defaults.

const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Default document font. The manuals are Korean.
const DEFAULT_FONT: &str = "Malgun Gothic";

/// Generate word/styles.xml.
pub fn styles_xml() -> String {
    let mut xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n<w:styles xmlns:w=\"{NS_W}\">"
    );

    // Document defaults: 11pt body font
    xml.push_str(&format!(
        "<w:docDefaults><w:rPrDefault><w:rPr>\
         <w:rFonts w:ascii=\"{DEFAULT_FONT}\" w:hAnsi=\"{DEFAULT_FONT}\" w:eastAsia=\"{DEFAULT_FONT}\"/>\
         <w:sz w:val=\"22\"/><w:szCs w:val=\"22\"/>\
         </w:rPr></w:rPrDefault></w:docDefaults>"
    ));

    xml.push_str(
        "<w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\">\
         <w:name w:val=\"Normal\"/><w:qFormat/>\
         </w:style>",
    );

    xml.push_str(
        "<w:style w:type=\"table\" w:default=\"1\" w:styleId=\"TableNormal\">\
         <w:name w:val=\"Normal Table\"/>\
         <w:tblPr><w:tblCellMar>\
         <w:top w:w=\"0\" w:type=\"dxa\"/><w:left w:w=\"108\" w:type=\"dxa\"/>\
         <w:bottom w:w=\"0\" w:type=\"dxa\"/><w:right w:w=\"108\" w:type=\"dxa\"/>\
         </w:tblCellMar></w:tblPr>\
         </w:style>",
    );

    xml.push_str(&heading_style("Title", "Title", None, 56, false));
    xml.push_str(&heading_style("Heading1", "heading 1", Some(0), 32, true));
    xml.push_str(&heading_style("Heading2", "heading 2", Some(1), 26, true));
    xml.push_str(&heading_style("Heading3", "heading 3", Some(2), 22, true));

    xml.push_str(&list_style("ListBullet", "List Bullet", 1));
    xml.push_str(&list_style("ListNumber", "List Number", 2));

    xml.push_str(&light_shading_table_style());

    xml.push_str("</w:styles>");
    xml
}

fn heading_style(
    id: &str,
    name: &str,
    outline_level: Option<u8>,
    size_half_pt: u32,
    bold: bool,
) -> String {
    let outline = outline_level
        .map(|lvl| format!("<w:outlineLvl w:val=\"{lvl}\"/>"))
        .unwrap_or_default();
    let bold_tag = if bold { "<w:b/>" } else { "" };
    format!(
        "<w:style w:type=\"paragraph\" w:styleId=\"{id}\">\
         <w:name w:val=\"{name}\"/><w:basedOn w:val=\"Normal\"/><w:next w:val=\"Normal\"/><w:qFormat/>\
         <w:pPr><w:keepNext/><w:spacing w:before=\"240\" w:after=\"60\"/>{outline}</w:pPr>\
         <w:rPr>{bold_tag}<w:sz w:val=\"{size_half_pt}\"/><w:szCs w:val=\"{size_half_pt}\"/></w:rPr>\
         </w:style>"
    )
}

fn list_style(id: &str, name: &str, num_id: u32) -> String {
    format!(
        "<w:style w:type=\"paragraph\" w:styleId=\"{id}\">\
         <w:name w:val=\"{name}\"/><w:basedOn w:val=\"Normal\"/><w:qFormat/>\
         <w:pPr><w:numPr><w:numId w:val=\"{num_id}\"/></w:numPr></w:pPr>\
         </w:style>"
    )
}

/// Table style used by every table in both manuals: accent borders,
/// bold blue header row, banded rows.
fn light_shading_table_style() -> String {
    "<w:style w:type=\"table\" w:styleId=\"LightShadingAccent1\">\
     <w:name w:val=\"Light Shading Accent 1\"/><w:basedOn w:val=\"TableNormal\"/>\
     <w:tblPr>\
     <w:tblStyleRowBandSize w:val=\"1\"/><w:tblStyleColBandSize w:val=\"1\"/>\
     <w:tblBorders>\
     <w:top w:val=\"single\" w:sz=\"8\" w:space=\"0\" w:color=\"1E40AF\"/>\
     <w:bottom w:val=\"single\" w:sz=\"8\" w:space=\"0\" w:color=\"1E40AF\"/>\
     </w:tblBorders>\
     </w:tblPr>\
     <w:tblStylePr w:type=\"firstRow\">\
     <w:rPr><w:b/><w:color w:val=\"1E40AF\"/></w:rPr>\
     <w:tblPr/>\
     <w:tcPr><w:tcBorders>\
     <w:bottom w:val=\"single\" w:sz=\"8\" w:space=\"0\" w:color=\"1E40AF\"/>\
     </w:tcBorders></w:tcPr>\
     </w:tblStylePr>\
     <w:tblStylePr w:type=\"band1Horz\">\
     <w:tblPr/>\
     <w:tcPr><w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"DBE9FE\"/></w:tcPr>\
     </w:tblStylePr>\
     </w:style>"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_present() {
        let xml = styles_xml();
        for id in [
            "Normal",
            "Title",
            "Heading1",
            "Heading2",
            "Heading3",
            "ListBullet",
            "ListNumber",
            "LightShadingAccent1",
        ] {
            assert!(
                xml.contains(&format!("w:styleId=\"{id}\"")),
                "missing style {id}"
            );
        }
    }

    #[test]
    fn test_heading_outline_levels() {
        let xml = styles_xml();
        assert!(xml.contains("<w:outlineLvl w:val=\"0\"/>"));
        assert!(xml.contains("<w:outlineLvl w:val=\"2\"/>"));
    }

    #[test]
    fn test_list_styles_reference_numbering() {
        let xml = styles_xml();
        assert!(xml.contains("<w:numId w:val=\"1\"/>"));
        assert!(xml.contains("<w:numId w:val=\"2\"/>"));
    }
}

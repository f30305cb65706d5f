//! DOCX numbering (list) definitions.
//!
//! The manuals use two numbering instances: `numId` 1 for bulleted
//! lists and `numId` 2 for numbered step lists. Three nesting levels
//! each, indented 360 twips per level.

const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Generate word/numbering.xml.
pub fn numbering_xml() -> String {
    let mut xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n<w:numbering xmlns:w=\"{NS_W}\">"
    );

    // Abstract definition 0: bullet levels
    xml.push_str("<w:abstractNum w:abstractNumId=\"0\"><w:multiLevelType w:val=\"hybridMultilevel\"/>");
    for level in 0..3u8 {
        let bullet = match level {
            0 => "\u{2022}",
            1 => "\u{25E6}",
            _ => "\u{25AA}",
        };
        xml.push_str(&bullet_level(level, bullet));
    }
    xml.push_str("</w:abstractNum>");

    // Abstract definition 1: decimal levels
    xml.push_str("<w:abstractNum w:abstractNumId=\"1\"><w:multiLevelType w:val=\"hybridMultilevel\"/>");
    for level in 0..3u8 {
        xml.push_str(&decimal_level(level));
    }
    xml.push_str("</w:abstractNum>");

    xml.push_str("<w:num w:numId=\"1\"><w:abstractNumId w:val=\"0\"/></w:num>");
    xml.push_str("<w:num w:numId=\"2\"><w:abstractNumId w:val=\"1\"/></w:num>");
    xml.push_str("</w:numbering>");
    xml
}

fn bullet_level(level: u8, bullet: &str) -> String {
    let indent = 720 + 360 * level as u32;
    format!(
        "<w:lvl w:ilvl=\"{level}\">\
         <w:start w:val=\"1\"/>\
         <w:numFmt w:val=\"bullet\"/>\
         <w:lvlText w:val=\"{bullet}\"/>\
         <w:lvlJc w:val=\"left\"/>\
         <w:pPr><w:ind w:left=\"{indent}\" w:hanging=\"360\"/></w:pPr>\
         </w:lvl>"
    )
}

fn decimal_level(level: u8) -> String {
    let indent = 720 + 360 * level as u32;
    let text = format!("%{}.", level + 1);
    format!(
        "<w:lvl w:ilvl=\"{level}\">\
         <w:start w:val=\"1\"/>\
         <w:numFmt w:val=\"decimal\"/>\
         <w:lvlText w:val=\"{text}\"/>\
         <w:lvlJc w:val=\"left\"/>\
         <w:pPr><w:ind w:left=\"{indent}\" w:hanging=\"360\"/></w:pPr>\
         </w:lvl>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_has_both_instances() {
        let xml = numbering_xml();
        assert!(xml.contains("<w:num w:numId=\"1\">"));
        assert!(xml.contains("<w:num w:numId=\"2\">"));
        assert!(xml.contains("w:val=\"bullet\""));
        assert!(xml.contains("w:val=\"decimal\""));
    }

    #[test]
    fn test_numbering_levels() {
        let xml = numbering_xml();
        // Three levels per abstract definition
        assert_eq!(xml.matches("<w:lvl w:ilvl=\"0\">").count(), 2);
        assert_eq!(xml.matches("<w:lvl w:ilvl=\"2\">").count(), 2);
    }
}

//! Integration tests for the developer manual builder.

use manualgen::manuals::dev;
use manualgen::{to_docx_bytes, Block};
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

#[test]
fn builds_without_external_input() {
    let doc = dev::build();
    assert!(!doc.is_empty());
    assert!(doc.resources.is_empty());
}

#[test]
fn output_is_deterministic() {
    let first = to_docx_bytes(&dev::build()).unwrap();
    let second = to_docx_bytes(&dev::build()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn package_contains_required_parts() {
    let bytes = to_docx_bytes(&dev::build()).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
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
fn document_xml_contains_chapter_headings() {
    let bytes = to_docx_bytes(&dev::build()).unwrap();
    let xml = read_part(&bytes, "word/document.xml");
    for chapter in [
        "1장. 아키텍처 개요",
        "5장. Backend API 레퍼런스",
        "10장. Nginx 설정",
        "부록. 마이그레이션 및 트러블슈팅",
    ] {
        assert!(xml.contains(chapter), "missing chapter {chapter}");
    }
}

#[test]
fn every_table_has_header_and_fixed_columns() {
    let doc = dev::build();
    let tables: Vec<_> = doc.tables().collect();
    assert!(!tables.is_empty());

    for table in &tables {
        assert_eq!(table.header_rows().len(), 1, "table must have one header row");
        let columns = table.column_count();
        for row in &table.rows {
            assert_eq!(row.len(), columns, "ragged table row");
        }
    }
}

#[test]
fn api_reference_row_counts_match_literals() {
    let doc = dev::build();

    // Auth endpoints: 4 tuples plus the header row
    let auth_table = doc
        .tables()
        .find(|t| t.plain_text().contains("/api/auth/register"))
        .expect("auth table missing");
    assert_eq!(auth_table.row_count(), 5);
    assert_eq!(auth_table.column_count(), 4);

    // Announcement endpoints: 9 tuples plus the header row
    let announcements_table = doc
        .tables()
        .find(|t| t.plain_text().contains("/api/announcements/apply"))
        .expect("announcements table missing");
    assert_eq!(announcements_table.row_count(), 10);
}

#[test]
fn db_tables_use_monospace_column_names() {
    let doc = dev::build();
    let users_table = doc
        .tables()
        .find(|t| t.plain_text().contains("password_hash"))
        .expect("users table missing");

    let first_data_row = users_table.data_rows()[0];
    let first_cell = &first_data_row.cells[0];
    let style = &first_cell.content[0].runs[0].style;
    assert_eq!(style.font.as_deref(), Some("Courier New"));
}

#[test]
fn ends_with_footer_line() {
    let doc = dev::build();
    let text = doc.plain_text();
    assert!(text.ends_with("전북지역 졸업생 네트워크 플랫폼  |  개발자 매뉴얼 v2.0  |  2026년 2월 26일"));
}

#[test]
fn page_breaks_separate_chapters() {
    let doc = dev::build();
    let breaks = doc
        .content
        .iter()
        .filter(|b| matches!(b, Block::PageBreak))
        .count();
    // Cover, TOC, ten chapters
    assert_eq!(breaks, 12);
}

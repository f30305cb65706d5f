//! Integration tests for the user manual builder.

use manualgen::manuals::user;
use manualgen::{to_docx_bytes, Block};
use std::io::{Cursor, Read};
use std::path::Path;

/// Minimal PNG header: signature plus an IHDR chunk carrying the
/// dimensions. The builder only inspects these bytes.
fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    data.extend_from_slice(&13u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data
}

const SCREENSHOT_NAMES: [&str; 20] = [
    "01_main",
    "02_login",
    "03_register",
    "04_student_dashboard",
    "05_student_jobs",
    "06_student_jobfair",
    "07_student_industryvisit",
    "08_student_certification",
    "09_student_counseling",
    "10_student_networking",
    "11_student_profile",
    "12_student_career",
    "13_teacher_dashboard",
    "14_teacher_counseling",
    "15_admin_dashboard",
    "16_admin_users",
    "17_admin_jobs",
    "18_admin_board",
    "19_admin_announcements",
    "20_admin_codes",
];

#[test]
fn absent_directory_yields_placeholders_for_every_slot() {
    let doc = user::build(Path::new("no-such-directory"));

    assert!(doc.resources.is_empty());
    let text = doc.plain_text();
    for name in SCREENSHOT_NAMES {
        assert!(
            text.contains(&format!("[스크린샷 없음: {name}.png]")),
            "missing placeholder for {name}"
        );
    }

    // All four chapter headings survive
    let headings = doc.heading_texts();
    for chapter in ["1장. 시작하기", "2장. 학생 기능", "3장. 교사 기능", "4장. 관리자 기능"] {
        assert!(headings.iter().any(|h| h == chapter));
    }
}

#[test]
fn empty_directory_behaves_like_absent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let doc = user::build(dir.path());

    assert!(doc.resources.is_empty());
    assert!(doc.plain_text().contains("[스크린샷 없음: 01_main.png]"));
}

#[test]
fn present_screenshots_are_embedded() {
    let dir = tempfile::tempdir().unwrap();
    for name in SCREENSHOT_NAMES {
        std::fs::write(dir.path().join(format!("{name}.png")), png_bytes(1280, 720)).unwrap();
    }

    let doc = user::build(dir.path());
    assert_eq!(doc.resources.len(), 20);
    assert!(!doc.plain_text().contains("[스크린샷 없음:"));

    let image_blocks = doc
        .content
        .iter()
        .filter(|b| matches!(b, Block::Image { .. }))
        .count();
    assert_eq!(image_blocks, 20);
}

#[test]
fn partial_screenshots_mix_images_and_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("01_main.png"), png_bytes(800, 600)).unwrap();

    let doc = user::build(dir.path());
    assert_eq!(doc.resources.len(), 1);

    let text = doc.plain_text();
    assert!(!text.contains("[스크린샷 없음: 01_main.png]"));
    assert!(text.contains("[스크린샷 없음: 02_login.png]"));
}

#[test]
fn corrupt_screenshot_becomes_load_failure_note() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("01_main.png"), b"not a png at all").unwrap();

    let doc = user::build(dir.path());
    assert!(doc.resources.is_empty());
    assert!(doc.plain_text().contains("[이미지 로드 실패:"));
}

#[test]
fn captions_follow_every_slot() {
    let doc = user::build(Path::new("no-such-directory"));
    let text = doc.plain_text();
    assert!(text.contains("메인 화면"));
    assert!(text.contains("▲ 로그인 화면"));
    assert!(text.contains("▲ 코드 관리"));
}

#[test]
fn output_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("01_main.png"), png_bytes(640, 480)).unwrap();

    let first = to_docx_bytes(&user::build(dir.path())).unwrap();
    let second = to_docx_bytes(&user::build(dir.path())).unwrap();
    assert_eq!(first, second);
}

#[test]
fn embedded_images_land_in_media_with_relationships() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("01_main.png"), png_bytes(1000, 500)).unwrap();

    let bytes = to_docx_bytes(&user::build(dir.path())).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert!(archive.by_name("word/media/image1.png").is_ok());

    let mut rels = String::new();
    archive
        .by_name("word/_rels/document.xml.rels")
        .unwrap()
        .read_to_string(&mut rels)
        .unwrap();
    assert!(rels.contains("Target=\"media/image1.png\""));
}

#[test]
fn numbered_steps_carry_literal_prefixes() {
    let doc = user::build(Path::new("no-such-directory"));
    let step = doc
        .paragraphs()
        .find(|p| p.plain_text().contains("웹 브라우저에서 jjobb.kr 접속"))
        .expect("login steps missing");
    assert!(step.is_list_item());
    assert!(step.plain_text().starts_with("1. "));
}

//! Generates the user manual DOCX in the repository root.
//!
//! Screenshots are read from manual-screenshots/; missing files become
//! placeholder paragraphs in the output.
use manualgen::manuals::user;
use std::path::Path;

fn main() -> manualgen::Result<()> {
    let doc = user::build(Path::new(user::SCREENSHOT_DIR));
    manualgen::save_docx(&doc, user::OUTPUT_FILE)?;
    println!("✅ 사용자 매뉴얼 저장 완료: {}", user::OUTPUT_FILE);
    Ok(())
}

//! Generates the developer manual DOCX in the repository root.
use manualgen::manuals::dev;

fn main() -> manualgen::Result<()> {
    let doc = dev::build();
    manualgen::save_docx(&doc, dev::OUTPUT_FILE)?;
    println!("✅ 개발자 매뉴얼 저장 완료: {}", dev::OUTPUT_FILE);
    Ok(())
}

//! Manual builders.
//!
//! Each submodule assembles one complete manual top-to-bottom from its
//! literal content: formatting helpers append styled blocks to the
//! document, and a `build` procedure emits the cover page, table of
//! contents, chapters, and appendix in a fixed order. The binaries in
//! `src/bin/` serialize the result to the repository root.

pub mod dev;
pub mod user;

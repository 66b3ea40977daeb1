//! DOCX export using docx-rs
//!
//! - Styles: Heading1..Heading6 paragraph styles
//! - Numbering: the shared bullet list definition
//! - Writer: maps each block to one word-processing paragraph and packs the archive

mod numbering;
mod styles;
mod writer;

pub use writer::DocxWriter;

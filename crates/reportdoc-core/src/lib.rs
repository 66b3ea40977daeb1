//! reportdoc-core - document model and serialization
//!
//! This crate provides the flowable document model shared by the report and
//! markdown compilers in `reportdoc`, plus the serializers that consume it.
//!
//! # Architecture
//!
//! ```text
//! AnalysisReport ──compile_report──▶ ┌──────────┐ ──DocxWriter──▶ .docx bytes
//!                                    │ Document │
//! Markdown text ──compile_markdown─▶ └──────────┘ ──serialize───▶ Markdown preview
//! ```
//!
//! # Example
//!
//! ```rust
//! use reportdoc_core::{serialize, Block, Document, HeadingLevel, Options, Run};
//!
//! let doc = Document::new(vec![
//!     Block::Heading {
//!         text: "Summary".to_string(),
//!         level: HeadingLevel::H1,
//!     },
//!     Block::Paragraph {
//!         runs: vec![Run::plain("Gap: "), Run::emphasized("1.50")],
//!     },
//! ]);
//!
//! let markdown = serialize(&doc, &Options::default());
//! assert_eq!(markdown, "# Summary\nGap: **1.50**");
//! ```

mod ast;
#[cfg(feature = "docx")]
pub mod docx;
mod options;
mod serialize;

pub use ast::{runs_text, Block, Document, HeadingLevel, Run};
pub use options::{DocxOptions, Options};
pub use serialize::serialize;

/// Error type for document export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to pack DOCX: {0}")]
    Pack(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;

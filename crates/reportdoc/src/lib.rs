//! # reportdoc
//!
//! Compile maturity-analysis reports into word-processing documents.
//!
//! Two pipelines produce the same [`Document`] model:
//!
//! - **Structured**: a JSON [`AnalysisReport`] laid out on a fixed template
//!   (title, summary, justification, plan).
//! - **Markdown**: free text scanned line by line into titles, headings,
//!   bullets, paragraphs and blank lines.
//!
//! The choice between them is made once, at the boundary, by resolving a
//! [`ReportInput`] from the payload's content type.
//!
//! ## Example (structured)
//!
//! ```rust
//! use reportdoc::{compile_report, AnalysisReport};
//!
//! let report: AnalysisReport =
//!     serde_json::from_str(r#"{"summary": {"currentAverage": 2.5}}"#).unwrap();
//! let doc = compile_report(&report);
//! assert!(doc.iter().any(|b| b.text() == "Puntaje promedio actual: 2.50"));
//! ```
//!
//! ## Example (markdown)
//!
//! ```rust
//! use reportdoc::compile_markdown;
//!
//! let doc = compile_markdown("## Informe\n- **MFA** pendiente");
//! assert_eq!(doc.title(), Some("Informe"));
//! assert_eq!(doc.bullet_count(), 1);
//! ```

mod analysis;
pub mod builder;
pub mod inline;
mod input;
mod markdown;
mod report;
mod rules;
mod service;
mod template;

pub use analysis::{
    format_number, format_score, AnalysisReport, Justification, Plan, Score, Summary,
};
pub use input::ReportInput;
pub use markdown::compile_markdown_with;
pub use report::compile_report_with;
pub use rules::{Line, LineRule, MatchFn, Rules};
pub use service::{Artifact, ReportOptions, ReportService, DEFAULT_FILENAME};
pub use template::ReportTemplate;

pub use reportdoc_core::{Block, Document, DocxOptions, HeadingLevel, Options, Run};

/// Error type for report decoding and export
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Invalid JSON report: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid UTF-8 text: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("Unexpected content type ({content_type}). Content: {preview}…")]
    UnsupportedContentType {
        content_type: String,
        preview: String,
    },

    #[error(transparent)]
    Export(#[from] reportdoc_core::ExportError),
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// Compile a structured report with the default template
pub fn compile_report(report: &AnalysisReport) -> Document {
    compile_report_with(report, &ReportTemplate::default())
}

/// Compile markdown text with the built-in line rules
pub fn compile_markdown(text: &str) -> Document {
    compile_markdown_with(text, &Rules::new())
}

//! Input resolution at the transport boundary.
//!
//! The compilers never inspect payloads themselves; a [`ReportInput`] is
//! resolved once from a content type (or a file name) and then dispatched.

use std::path::Path;

use log::{debug, warn};

use crate::analysis::AnalysisReport;
use crate::{ReportError, Result};

const PREVIEW_CHARS: usize = 200;

/// A decoded report payload
#[derive(Debug, Clone, PartialEq)]
pub enum ReportInput {
    /// Structured analysis object
    Analysis(AnalysisReport),
    /// Free-form markdown text
    Markdown(String),
}

impl ReportInput {
    /// Decode a payload according to its reported content type
    pub fn from_payload(content_type: &str, body: &[u8]) -> Result<Self> {
        let content_type = content_type.to_lowercase();

        if content_type.contains("application/json") {
            return Self::from_json(body);
        }

        if ["text/plain", "text/markdown", "text/x-markdown"]
            .iter()
            .any(|ct| content_type.contains(ct))
        {
            return Self::from_text(body);
        }

        warn!("rejecting payload with content type {content_type:?}");
        Err(ReportError::UnsupportedContentType {
            content_type,
            preview: preview(body),
        })
    }

    /// Decode a file by extension, sniffing the body when the extension is unknown
    pub fn from_path_hint(path: &Path, body: &[u8]) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("json") => Self::from_json(body),
            Some("md" | "markdown" | "txt") => Self::from_text(body),
            _ => {
                let looks_like_json = body
                    .iter()
                    .find(|b| !b.is_ascii_whitespace())
                    .is_some_and(|b| *b == b'{');
                debug!(
                    "no known extension on {}, sniffed json: {looks_like_json}",
                    path.display()
                );
                if looks_like_json {
                    Self::from_json(body)
                } else {
                    Self::from_text(body)
                }
            }
        }
    }

    pub fn from_json(body: &[u8]) -> Result<Self> {
        let report = serde_json::from_slice(body)?;
        Ok(ReportInput::Analysis(report))
    }

    pub fn from_text(body: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(body)?;
        Ok(ReportInput::Markdown(text.to_string()))
    }
}

impl From<AnalysisReport> for ReportInput {
    fn from(report: AnalysisReport) -> Self {
        ReportInput::Analysis(report)
    }
}

/// First characters of a body, for error messages
fn preview(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(PREVIEW_CHARS)
        .collect()
}

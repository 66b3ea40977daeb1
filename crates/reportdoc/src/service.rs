//! ReportService - the main entry point for report compilation.

use reportdoc_core::{serialize, Document, DocxOptions, Options};

use crate::analysis::AnalysisReport;
use crate::input::ReportInput;
use crate::markdown::compile_markdown_with;
use crate::report::compile_report_with;
use crate::rules::{LineRule, Rules};
use crate::template::ReportTemplate;

/// Filename used when the transport supplies none
pub const DEFAULT_FILENAME: &str = "EstadoMadurez-NISTCSF.docx";

/// Options for ReportService
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Labels for the structured template
    pub template: ReportTemplate,

    /// Filename for exported artifacts when none is given
    pub default_filename: String,

    /// Markdown preview rendering
    pub markdown: Options,

    /// DOCX export
    pub docx: DocxOptions,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            template: ReportTemplate::default(),
            default_filename: DEFAULT_FILENAME.to_string(),
            markdown: Options::default(),
            docx: DocxOptions::default(),
        }
    }
}

/// Exported bytes and the name to save them under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// The main service for compiling reports into documents
#[derive(Debug)]
pub struct ReportService {
    options: ReportOptions,
    rules: Rules,
}

impl ReportService {
    /// Create a new ReportService with default options
    pub fn new() -> Self {
        Self::with_options(ReportOptions::default())
    }

    /// Create a ReportService with custom options
    pub fn with_options(options: ReportOptions) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Add a custom markdown line rule, checked before the built-in ones
    pub fn add_rule(&mut self, key: &str, rule: LineRule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ReportOptions {
        &mut self.options
    }

    /// Compile either kind of input
    pub fn compile(&self, input: &ReportInput) -> Document {
        match input {
            ReportInput::Analysis(report) => self.compile_report(report),
            ReportInput::Markdown(text) => self.compile_markdown(text),
        }
    }

    pub fn compile_report(&self, report: &AnalysisReport) -> Document {
        compile_report_with(report, &self.options.template)
    }

    pub fn compile_markdown(&self, text: &str) -> Document {
        compile_markdown_with(text, &self.rules)
    }

    /// Render a compiled document as Markdown
    pub fn render_markdown(&self, document: &Document) -> String {
        serialize(document, &self.options.markdown)
    }

    /// Compile and serialize to DOCX
    #[cfg(feature = "docx")]
    pub fn export(&self, input: &ReportInput, filename: Option<&str>) -> crate::Result<Artifact> {
        let document = self.compile(input);
        self.export_document(&document, filename)
    }

    /// Serialize an already compiled document to DOCX
    #[cfg(feature = "docx")]
    pub fn export_document(
        &self,
        document: &Document,
        filename: Option<&str>,
    ) -> crate::Result<Artifact> {
        let writer = reportdoc_core::docx::DocxWriter::with_options(self.options.docx.clone());
        let bytes = writer.write(document)?;

        Ok(Artifact {
            filename: self.resolve_filename(filename),
            bytes,
        })
    }

    /// Fall back to the configured default for a missing or blank name
    pub fn resolve_filename(&self, filename: Option<&str>) -> String {
        filename
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.options.default_filename)
            .to_string()
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new()
    }
}

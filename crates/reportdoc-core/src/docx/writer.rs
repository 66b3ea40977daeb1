//! DOCX document writer

use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, IndentLevel, NumberingId, Paragraph, Run};
use log::debug;

use super::numbering::{self, MAX_LEVEL};
use super::styles;
use crate::ast::{self, Block, Document};
use crate::options::DocxOptions;
use crate::{ExportError, Result};

const BULLET_NUMBERING_ID: usize = 1;

/// Writes a [`Document`] as a packed `.docx` archive
#[derive(Debug, Clone, Default)]
pub struct DocxWriter {
    options: DocxOptions,
}

impl DocxWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DocxOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DocxOptions {
        &self.options
    }

    /// Build the in-memory docx tree without packing it
    pub fn build(&self, document: &Document) -> Docx {
        let mut docx = styles::initialize_styles(Docx::new());

        if document.bullet_count() > 0 {
            docx = numbering::add_bullet_numbering(
                docx,
                BULLET_NUMBERING_ID,
                &self.options.bullet_glyph,
            );
        }

        document
            .iter()
            .fold(docx, |docx, block| docx.add_paragraph(self.paragraph(block)))
    }

    /// Build and pack the document into `.docx` bytes
    pub fn write(&self, document: &Document) -> Result<Vec<u8>> {
        debug!("packing {} blocks into docx", document.len());

        let mut buffer = Vec::new();
        self.build(document)
            .build()
            .pack(&mut Cursor::new(&mut buffer))
            .map_err(|e| ExportError::Pack(e.to_string()))?;

        debug!("packed docx: {} bytes", buffer.len());
        Ok(buffer)
    }

    fn paragraph(&self, block: &Block) -> Paragraph {
        match block {
            Block::Title { text } => {
                let mut run = Run::new().add_text(text).size(self.options.title_size);
                if self.options.title_bold {
                    run = run.bold();
                }
                Paragraph::new().align(AlignmentType::Center).add_run(run)
            }

            Block::Heading { text, level } => Paragraph::new()
                .style(level.style_id())
                .add_run(Run::new().add_text(text)),

            Block::Paragraph { runs } => add_runs(Paragraph::new(), runs),

            Block::BulletItem { level, runs } => {
                let depth = usize::from(*level).min(MAX_LEVEL);
                let para = Paragraph::new().numbering(
                    NumberingId::new(BULLET_NUMBERING_ID),
                    IndentLevel::new(depth),
                );
                add_runs(para, runs)
            }

            Block::Blank => Paragraph::new(),
        }
    }
}

fn add_runs(para: Paragraph, runs: &[ast::Run]) -> Paragraph {
    runs.iter().fold(para, |para, run| {
        let mut docx_run = Run::new().add_text(&run.text);
        if run.emphasized {
            docx_run = docx_run.bold();
        }
        para.add_run(docx_run)
    })
}

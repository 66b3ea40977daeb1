//! Configuration options for document serialization

/// Options for Markdown rendering
#[derive(Debug, Clone)]
pub struct Options {
    /// Bullet list marker
    pub bullet_marker: char,

    /// Delimiter wrapped around emphasized runs
    pub strong_delimiter: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bullet_marker: '-',
            strong_delimiter: "**".to_string(),
        }
    }
}

/// Options for DOCX export
#[derive(Debug, Clone)]
pub struct DocxOptions {
    /// Title run size in half-points
    pub title_size: usize,

    /// Render the title run bold
    pub title_bold: bool,

    /// Glyph used for level-0 bullets
    pub bullet_glyph: String,
}

impl Default for DocxOptions {
    fn default() -> Self {
        Self {
            title_size: 32,
            title_bold: true,
            bullet_glyph: "•".to_string(),
        }
    }
}

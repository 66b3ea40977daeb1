//! Flowable document model
//!
//! This module defines the block and run nodes shared by both compilers.
//! A [`Document`] is an ordered sequence of [`Block`]s; it is built once per
//! conversion and handed to a serializer.

/// Heading weight, `H1` (heaviest) through `H6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Map a numeric depth to a heading level.
    ///
    /// Depths above 6 clamp to `H6`; depth 0 clamps to `H1`.
    pub fn from_depth(depth: u8) -> Self {
        match depth {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            3 => HeadingLevel::H3,
            4 => HeadingLevel::H4,
            5 => HeadingLevel::H5,
            _ => HeadingLevel::H6,
        }
    }

    /// Numeric depth in `1..=6`
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }

    /// Paragraph style id used in word-processing output
    pub fn style_id(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "Heading1",
            HeadingLevel::H2 => "Heading2",
            HeadingLevel::H3 => "Heading3",
            HeadingLevel::H4 => "Heading4",
            HeadingLevel::H5 => "Heading5",
            HeadingLevel::H6 => "Heading6",
        }
    }
}

impl From<u8> for HeadingLevel {
    fn from(depth: u8) -> Self {
        Self::from_depth(depth)
    }
}

/// A span of text sharing one emphasis state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub emphasized: bool,
}

impl Run {
    pub fn new(text: impl Into<String>, emphasized: bool) -> Self {
        Self {
            text: text.into(),
            emphasized,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }
}

/// A block-level document node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Document title: centered, emphasized, larger size
    Title { text: String },

    /// Section heading
    Heading { text: String, level: HeadingLevel },

    /// A line of prose
    Paragraph { runs: Vec<Run> },

    /// One list entry at the given indentation depth
    BulletItem { level: u8, runs: Vec<Run> },

    /// Explicit empty line
    Blank,
}

impl Block {
    /// Plain text of this block with emphasis dropped
    pub fn text(&self) -> String {
        match self {
            Block::Title { text } | Block::Heading { text, .. } => text.clone(),
            Block::Paragraph { runs } | Block::BulletItem { runs, .. } => runs_text(runs),
            Block::Blank => String::new(),
        }
    }

    /// Inline runs, empty for blocks that carry plain text
    pub fn runs(&self) -> &[Run] {
        match self {
            Block::Paragraph { runs } | Block::BulletItem { runs, .. } => runs,
            _ => &[],
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    pub fn is_bullet(&self) -> bool {
        matches!(self, Block::BulletItem { .. })
    }
}

/// Concatenate the text of a run sequence
pub fn runs_text(runs: &[Run]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

/// An ordered, immutable sequence of blocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// The document title, if one was emitted
    pub fn title(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::Title { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Count headings at a given level
    pub fn heading_count(&self, level: HeadingLevel) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Heading { level: l, .. } if *l == level))
            .count()
    }

    /// Count bullet items at any depth
    pub fn bullet_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_bullet()).count()
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self::new(blocks)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

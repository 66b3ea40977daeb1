//! Block constructors shared by both compilers.

use reportdoc_core::{Block, HeadingLevel};

use crate::inline;

pub fn title(text: impl Into<String>) -> Block {
    Block::Title { text: text.into() }
}

pub fn heading(text: impl Into<String>, level: impl Into<HeadingLevel>) -> Block {
    Block::Heading {
        text: text.into(),
        level: level.into(),
    }
}

/// A paragraph with inline emphasis resolved
pub fn paragraph(line: &str) -> Block {
    Block::Paragraph {
        runs: inline::format(line),
    }
}

pub fn bullet(line: &str, level: u8) -> Block {
    Block::BulletItem {
        level,
        runs: inline::format(line),
    }
}

/// One bullet per item; absent or empty input yields no blocks
pub fn bullet_list<S: AsRef<str>>(items: Option<&[S]>, level: u8) -> Vec<Block> {
    items
        .unwrap_or_default()
        .iter()
        .map(|item| bullet(item.as_ref(), level))
        .collect()
}

pub fn blank() -> Block {
    Block::Blank
}

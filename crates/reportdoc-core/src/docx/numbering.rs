//! Bullet numbering definition for DOCX lists

use docx_rs::{
    AbstractNumbering, Docx, Level, LevelJc, LevelText, NumberFormat, Numbering,
    SpecialIndentType, Start,
};

/// Deepest list level Word defines (levels are zero-based)
pub const MAX_LEVEL: usize = 8;

/// Glyph for a bullet nesting depth; depth 0 uses the configured glyph
fn glyph_for(depth: usize, top: &str) -> &str {
    match depth {
        0 => top,
        1 => "○",
        2 => "▪",
        3 => "▫",
        4 => "◆",
        _ => "◇",
    }
}

fn bullet_level(depth: usize, glyph: &str) -> Level {
    let indent_size = 720 * (depth + 1) as i32;

    Level::new(
        depth,
        Start::new(1),
        NumberFormat::new("bullet"),
        LevelText::new(glyph),
        LevelJc::new("left"),
    )
    .indent(
        Some(indent_size),
        Some(SpecialIndentType::Hanging(360)),
        None,
        None,
    )
}

/// Add one bullet numbering definition and return its numbering id
pub fn add_bullet_numbering(docx: Docx, id: usize, glyph: &str) -> Docx {
    let abstract_numbering = (0..=MAX_LEVEL).fold(AbstractNumbering::new(id), |abs, depth| {
        abs.add_level(bullet_level(depth, glyph_for(depth, glyph)))
    });

    docx.add_abstract_numbering(abstract_numbering)
        .add_numbering(Numbering::new(id, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs() {
        assert_eq!(glyph_for(0, "-"), "-");
        assert_eq!(glyph_for(1, "-"), "○");
        assert_eq!(glyph_for(MAX_LEVEL, "-"), "◇");
    }
}

//! Paragraph styles registered in every exported document

use docx_rs::{Docx, Style, StyleType};

use crate::ast::HeadingLevel;

const HEADING_LEVELS: [HeadingLevel; 6] = [
    HeadingLevel::H1,
    HeadingLevel::H2,
    HeadingLevel::H3,
    HeadingLevel::H4,
    HeadingLevel::H5,
    HeadingLevel::H6,
];

/// Run size in half-points for a heading level
pub fn heading_size(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 32,
        HeadingLevel::H2 => 28,
        HeadingLevel::H3 => 26,
        HeadingLevel::H4 => 24,
        HeadingLevel::H5 => 22,
        HeadingLevel::H6 => 20,
    }
}

fn heading_style(level: HeadingLevel) -> Style {
    Style::new(level.style_id(), StyleType::Paragraph)
        .name(format!("Heading {}", level.depth()))
        .size(heading_size(level))
        .bold()
}

/// Register Heading1..Heading6
pub fn initialize_styles(docx: Docx) -> Docx {
    HEADING_LEVELS
        .iter()
        .fold(docx, |docx, level| docx.add_style(heading_style(*level)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_sizes_decrease() {
        let sizes: Vec<usize> = HEADING_LEVELS.iter().map(|l| heading_size(*l)).collect();
        assert!(sizes.windows(2).all(|w| w[0] > w[1]));
    }
}

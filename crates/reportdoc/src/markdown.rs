//! Markdown compiler.
//!
//! A line-oriented scan: every physical line becomes exactly one block, in
//! input order. The only state carried between lines is whether the first
//! level-2 heading has already been promoted to the document title.

use log::debug;
use reportdoc_core::{Block, Document};

use crate::builder::{blank, bullet, heading, paragraph, title};
use crate::inline::plain_text;
use crate::rules::{Line, Rules};

const TITLE_LEVEL: u8 = 2;

/// Compile markdown text using the given line rules
pub fn compile_markdown_with(text: &str, rules: &Rules) -> Document {
    let normalized = normalize_line_endings(text);

    let (blocks, title_promoted) = normalized.lines().map(str::trim_end).fold(
        (Vec::new(), false),
        |(mut blocks, title_promoted), line| {
            let (block, title_promoted) = compile_line(rules.classify(line), title_promoted);
            blocks.push(block);
            (blocks, title_promoted)
        },
    );

    let document = Document::new(blocks);
    debug!(
        "compiled markdown: {} blocks, title promoted: {}",
        document.len(),
        title_promoted
    );
    document
}

/// Map one classified line to a block, threading the title flag
fn compile_line(line: Line<'_>, title_promoted: bool) -> (Block, bool) {
    match line {
        Line::Blank => (blank(), title_promoted),

        Line::Heading { level, text } if level == TITLE_LEVEL && !title_promoted => {
            debug!("promoting {text:?} to document title");
            (title(plain_text(text)), true)
        }

        Line::Heading { level, text } => (heading(plain_text(text), level), title_promoted),

        Line::Bullet { level, text } => (bullet(text, level), title_promoted),

        Line::Text(text) => (paragraph(text), title_promoted),
    }
}

/// Convert `\r\n` and lone `\r` to `\n`
fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reportdoc_core::{HeadingLevel, Run};

    fn compile(text: &str) -> Vec<Block> {
        compile_markdown_with(text, &Rules::new()).into_blocks()
    }

    #[test]
    fn test_title_promotion_happens_once() {
        assert_eq!(
            compile("## A\n## B"),
            vec![
                Block::Title {
                    text: "A".to_string()
                },
                Block::Heading {
                    text: "B".to_string(),
                    level: HeadingLevel::H2,
                },
            ]
        );
    }

    #[test]
    fn test_other_levels_do_not_promote() {
        let blocks = compile("# Top\n### Deep\n## Title\n# Again");
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    text: "Top".to_string(),
                    level: HeadingLevel::H1,
                },
                Block::Heading {
                    text: "Deep".to_string(),
                    level: HeadingLevel::H3,
                },
                Block::Title {
                    text: "Title".to_string()
                },
                Block::Heading {
                    text: "Again".to_string(),
                    level: HeadingLevel::H1,
                },
            ]
        );
    }

    #[test]
    fn test_bullet_detection() {
        for line in ["- x", "* x", "• x"] {
            assert_eq!(
                compile(line),
                vec![Block::BulletItem {
                    level: 0,
                    runs: vec![Run::plain("x")],
                }],
                "{line}"
            );
        }
        assert_eq!(
            compile("-x"),
            vec![Block::Paragraph {
                runs: vec![Run::plain("-x")],
            }]
        );
    }

    #[test]
    fn test_lone_hash_is_paragraph() {
        assert_eq!(
            compile("#"),
            vec![Block::Paragraph {
                runs: vec![Run::plain("#")],
            }]
        );
        // trailing whitespace is trimmed before classification
        assert_eq!(
            compile("##   "),
            vec![Block::Paragraph {
                runs: vec![Run::plain("##")],
            }]
        );
    }

    #[test]
    fn test_blank_lines_preserved_in_order() {
        let blocks = compile("a\n\n   \nb");
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[1], Block::Blank);
        assert_eq!(blocks[2], Block::Blank);
        assert_eq!(blocks[3].text(), "b");
    }

    #[test]
    fn test_line_endings_normalized() {
        let unix = compile("## T\n- a\ntext");
        assert_eq!(compile("## T\r\n- a\r\ntext"), unix);
        assert_eq!(compile("## T\r- a\rtext"), unix);
    }

    #[test]
    fn test_trailing_newline_adds_no_block() {
        assert_eq!(compile("a\n").len(), 1);
        assert_eq!(compile("a\n\n").len(), 2);
        assert!(compile("").is_empty());
    }

    #[test]
    fn test_inline_emphasis_in_paragraphs_and_bullets() {
        let blocks = compile("Nivel **alto** hoy\n- **MFA** pendiente");
        assert_eq!(
            blocks[0],
            Block::Paragraph {
                runs: vec![
                    Run::plain("Nivel "),
                    Run::emphasized("alto"),
                    Run::plain(" hoy"),
                ],
            }
        );
        assert_eq!(
            blocks[1],
            Block::BulletItem {
                level: 0,
                runs: vec![Run::emphasized("MFA"), Run::plain(" pendiente")],
            }
        );
    }

    #[test]
    fn test_heading_markers_stripped() {
        assert_eq!(
            compile("## **Informe**"),
            vec![Block::Title {
                text: "Informe".to_string()
            }]
        );
    }

    #[test]
    fn test_paragraph_keeps_leading_whitespace() {
        assert_eq!(
            compile("  indented"),
            vec![Block::Paragraph {
                runs: vec![Run::plain("  indented")],
            }]
        );
    }
}

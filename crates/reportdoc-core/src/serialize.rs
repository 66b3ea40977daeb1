//! Markdown rendering of a document
//!
//! Renders a block sequence back to line-oriented Markdown. Every block
//! occupies exactly one line, so explicit [`Block::Blank`]s survive as empty
//! lines. A document ending in a blank gets a final newline so that line is
//! still there when the text is split back into lines.

use crate::ast::{Block, Document, Run};
use crate::options::Options;

/// Serialize a document to a Markdown string
pub fn serialize(document: &Document, options: &Options) -> String {
    let mut output = String::with_capacity(document.len() * 32);

    for (i, block) in document.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        serialize_block(block, options, &mut output);
    }

    if matches!(document.blocks().last(), Some(Block::Blank)) {
        output.push('\n');
    }

    output
}

fn serialize_block(block: &Block, options: &Options, out: &mut String) {
    match block {
        // The title is written as the first level-2 heading, which is what
        // the markdown compiler promotes back to a title.
        Block::Title { text } => {
            out.push_str("## ");
            out.push_str(text);
        }

        Block::Heading { text, level } => {
            for _ in 0..level.depth() {
                out.push('#');
            }
            out.push(' ');
            out.push_str(text);
        }

        Block::Paragraph { runs } => serialize_runs(runs, options, out),

        Block::BulletItem { level, runs } => {
            for _ in 0..*level {
                out.push_str("  ");
            }
            out.push(options.bullet_marker);
            out.push(' ');
            serialize_runs(runs, options, out);
        }

        Block::Blank => {}
    }
}

fn serialize_runs(runs: &[Run], options: &Options, out: &mut String) {
    for run in runs {
        if run.emphasized && !run.text.is_empty() {
            out.push_str(&options.strong_delimiter);
            out.push_str(&run.text);
            out.push_str(&options.strong_delimiter);
        } else {
            out.push_str(&run.text);
        }
    }
}

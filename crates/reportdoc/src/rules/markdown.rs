//! Built-in markdown line rules, in priority order.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Line, LineRule};

static ATX_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6}) +(\S.*)$").unwrap());
static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-*•] +(\S.*)$").unwrap());

/// Create all built-in rules
pub fn markdown_rules() -> Vec<LineRule> {
    vec![
        LineRule::new("blank", blank),
        LineRule::new("heading", heading),
        LineRule::new("bullet", bullet),
    ]
}

fn blank(line: &str) -> Option<Line<'_>> {
    line.trim().is_empty().then_some(Line::Blank)
}

fn heading(line: &str) -> Option<Line<'_>> {
    let caps = ATX_HEADING_RE.captures(line)?;
    let hashes = caps.get(1)?.as_str();
    let text = caps.get(2)?.as_str();
    Some(Line::Heading {
        level: hashes.len() as u8,
        text,
    })
}

fn bullet(line: &str) -> Option<Line<'_>> {
    let caps = BULLET_RE.captures(line)?;
    Some(Line::Bullet {
        level: 0,
        text: caps.get(1)?.as_str(),
    })
}

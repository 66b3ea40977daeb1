//! Inline text formatting.
//!
//! Splits a line into [`Run`]s on paired `**` markers. Markers pair up left
//! to right; a trailing unpaired marker stays literal.

use reportdoc_core::{runs_text, Run};

/// Emphasis marker
pub const STRONG_MARKER: &str = "**";

/// Split a line into plain and emphasized runs.
///
/// Adjacent runs with the same emphasis are merged and empty runs are dropped,
/// so `"a **b** c"` yields three runs and `"****"` yields none.
pub fn format(line: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find(STRONG_MARKER) {
        let inner = &rest[open + STRONG_MARKER.len()..];
        let Some(close) = inner.find(STRONG_MARKER) else {
            break;
        };

        push_run(&mut runs, &rest[..open], false);
        push_run(&mut runs, &inner[..close], true);
        rest = &inner[close + STRONG_MARKER.len()..];
    }

    push_run(&mut runs, rest, false);
    runs
}

/// Text of a line with paired markers removed
pub fn plain_text(line: &str) -> String {
    runs_text(&format(line))
}

fn push_run(runs: &mut Vec<Run>, text: &str, emphasized: bool) {
    if text.is_empty() {
        return;
    }

    match runs.last_mut() {
        Some(last) if last.emphasized == emphasized => last.text.push_str(text),
        _ => runs.push(Run::new(text, emphasized)),
    }
}

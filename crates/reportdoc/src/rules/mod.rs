//! Rule system for markdown line classification.

mod markdown;
mod rule;

pub use markdown::markdown_rules;
pub use rule::{Line, LineRule, MatchFn};

use indexmap::IndexMap;
use log::trace;

/// Collection of line rules
pub struct Rules {
    /// Custom rules added by the user (checked first)
    custom_rules: IndexMap<String, LineRule>,
    /// Built-in markdown rules
    markdown_rules: Vec<LineRule>,
}

impl Rules {
    /// Create a new Rules instance with the built-in markdown rules
    pub fn new() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            markdown_rules: markdown_rules(),
        }
    }

    /// Add a custom rule; re-adding a key replaces the rule in place
    pub fn add(&mut self, key: &str, rule: LineRule) {
        self.custom_rules.insert(key.to_string(), rule);
    }

    /// Classify one line. Lines no rule claims are [`Line::Text`].
    pub fn classify<'a>(&self, line: &'a str) -> Line<'a> {
        let rules = self.custom_rules.values().chain(&self.markdown_rules);

        for rule in rules {
            if let Some(classified) = rule.classify(line) {
                trace!("line {line:?} matched rule {}", rule.name());
                return classified;
            }
        }

        Line::Text(line)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rules")
            .field("custom_rules", &self.custom_rules.keys().collect::<Vec<_>>())
            .field("markdown_rules", &self.markdown_rules.len())
            .finish()
    }
}

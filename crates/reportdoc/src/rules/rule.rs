//! Line classification types.

/// A classified markdown line, borrowing its text from the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Whitespace only
    Blank,
    /// ATX heading with its `#` count
    Heading { level: u8, text: &'a str },
    /// List entry with the marker stripped
    Bullet { level: u8, text: &'a str },
    /// Anything else
    Text(&'a str),
}

/// Type alias for line matchers
pub type MatchFn = Box<dyn for<'a> Fn(&'a str) -> Option<Line<'a>> + Send + Sync>;

/// A named matcher; the first rule that returns `Some` classifies the line
pub struct LineRule {
    name: String,
    matcher: MatchFn,
}

impl LineRule {
    /// Create a new rule
    pub fn new<F>(name: &str, matcher: F) -> Self
    where
        F: for<'a> Fn(&'a str) -> Option<Line<'a>> + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            matcher: Box::new(matcher),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply this rule's matcher
    pub fn classify<'a>(&self, line: &'a str) -> Option<Line<'a>> {
        (self.matcher)(line)
    }
}

impl std::fmt::Debug for LineRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineRule").field("name", &self.name).finish()
    }
}

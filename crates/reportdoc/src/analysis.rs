//! Structured analysis input.
//!
//! Every section and field is optional. Keys are accepted in the English
//! camelCase spelling and in the Spanish snake_case spelling the upstream
//! workflow emits (`resumen.promedio_actual`, `plan.corto_plazo`, ...).

use serde::{Deserialize, Deserializer};

/// The analysis object delivered as JSON
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    #[serde(default, alias = "resumen")]
    pub summary: Option<Summary>,

    #[serde(default, alias = "justificacion")]
    pub justification: Option<Justification>,

    #[serde(default)]
    pub plan: Option<Plan>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(default, alias = "promedio_actual")]
    pub current_average: Option<Score>,

    #[serde(default, alias = "promedio_objetivo")]
    pub target_average: Option<Score>,

    #[serde(default, alias = "brecha")]
    pub gap: Option<Score>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Justification {
    #[serde(default, alias = "fortalezas", deserialize_with = "lenient_items")]
    pub strengths: Option<Vec<String>>,

    #[serde(default, alias = "debilidades", deserialize_with = "lenient_items")]
    pub weaknesses: Option<Vec<String>>,

    #[serde(default, alias = "implicancias", deserialize_with = "lenient_items")]
    pub implications: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(default, alias = "corto_plazo", deserialize_with = "lenient_items")]
    pub short_term: Option<Vec<String>>,

    #[serde(default, alias = "mediano_plazo", deserialize_with = "lenient_items")]
    pub mid_term: Option<Vec<String>>,

    #[serde(default, alias = "largo_plazo", deserialize_with = "lenient_items")]
    pub long_term: Option<Vec<String>>,
}

/// A summary value: numbers get two decimals, text and flags are kept verbatim
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Number(f64),
    Text(String),
    Flag(bool),
}

impl Score {
    pub fn render(&self) -> String {
        match self {
            Score::Number(n) => format_number(*n),
            Score::Text(text) => text.clone(),
            Score::Flag(flag) => flag.to_string(),
        }
    }
}

impl From<f64> for Score {
    fn from(n: f64) -> Self {
        Score::Number(n)
    }
}

impl From<&str> for Score {
    fn from(text: &str) -> Self {
        Score::Text(text.to_string())
    }
}

/// Format a number with exactly two decimal digits.
///
/// Values exactly halfway between two cents round away from zero, so
/// `2.125` renders as `2.13`. Everything else rounds to the nearest cent.
pub fn format_number(n: f64) -> String {
    // -0.0 would otherwise print as "-0.00"
    let n = if n == 0.0 { 0.0 } else { n };

    // A double sits exactly on a half cent only when it is an odd number
    // of eighths (x.125, x.375, x.625, x.875).
    let eighths = n.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = (25 * eighths as u64 + 1) / 2;
        let sign = if n < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{:02}", cents / 100, cents % 100);
    }

    format!("{n:.2}")
}

/// Render an optional score, using `placeholder` when absent
pub fn format_score(score: Option<&Score>, placeholder: &str) -> String {
    score
        .map(Score::render)
        .unwrap_or_else(|| placeholder.to_string())
}

/// Accept strings, numbers and booleans as list items
fn lenient_items<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Item {
        Text(String),
        Number(serde_json::Number),
        Flag(bool),
    }

    let items: Option<Vec<Item>> = Option::deserialize(deserializer)?;
    Ok(items.map(|items| {
        items
            .into_iter()
            .map(|item| match item {
                Item::Text(text) => text,
                Item::Number(n) => n.to_string(),
                Item::Flag(b) => b.to_string(),
            })
            .collect()
    }))
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use reportdoc::ReportTemplate;

/// Output serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Docx,
    Md,
}

/// Load template labels: an optional TOML file layered over the chosen preset
pub fn load_template(path: Option<&Path>, english: bool) -> Result<ReportTemplate> {
    let Some(path) = path else {
        return Ok(preset(english));
    };

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read template {}", path.display()))?;
    let overrides: toml::Table = toml::from_str(&source)
        .with_context(|| format!("failed to parse template {}", path.display()))?;

    // Keys missing from the file keep the preset's labels
    let mut merged = toml::Value::try_from(preset(english)).context("failed to encode template")?;
    if let toml::Value::Table(table) = &mut merged {
        table.extend(overrides);
    }
    merged
        .try_into()
        .with_context(|| format!("invalid template {}", path.display()))
}

fn preset(english: bool) -> ReportTemplate {
    if english {
        ReportTemplate::english()
    } else {
        ReportTemplate::default()
    }
}

/// An explicit format wins; otherwise a `.md`/`.markdown` output means Markdown
pub fn resolve_format(explicit: Option<Format>, output: Option<&Path>) -> Format {
    if let Some(format) = explicit {
        return format;
    }

    match output
        .and_then(|p| p.extension())
        .and_then(|ext| ext.to_str())
    {
        Some("md" | "markdown") => Format::Md,
        _ => Format::Docx,
    }
}

/// Output path when none is given
pub fn default_output(default_filename: &str, format: Format) -> PathBuf {
    let path = PathBuf::from(default_filename);
    match format {
        Format::Docx => path,
        Format::Md => path.with_extension("md"),
    }
}

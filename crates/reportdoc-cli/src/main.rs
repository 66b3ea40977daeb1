mod config;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{info, LevelFilter};
use reportdoc::{ReportInput, ReportOptions, ReportService};

use config::{default_output, load_template, resolve_format, Format};

#[derive(Parser)]
#[command(
    name = "reportdoc",
    version,
    about = "Compile analysis reports (JSON or Markdown) into .docx documents"
)]
struct Cli {
    /// Report file (.json, .md, .markdown, .txt); `-` reads stdin
    input: PathBuf,

    /// Output path; `-` writes to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Decode the input as this content type instead of guessing from the extension
    #[arg(long, value_name = "MIME")]
    content_type: Option<String>,

    /// Output format; inferred from the output extension when omitted
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// TOML file overriding template labels
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Start from the English template labels
    #[arg(long)]
    english: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);
    run(cli)
}

fn init_logger(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    let _ = env_logger::builder()
        .filter_module("reportdoc", level)
        .filter_module("reportdoc_core", level)
        .parse_default_env()
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let body = read_input(&cli.input)?;
    let input = match cli.content_type.as_deref() {
        Some(content_type) => ReportInput::from_payload(content_type, &body)?,
        None => ReportInput::from_path_hint(&cli.input, &body)?,
    };

    let template = load_template(cli.template.as_deref(), cli.english)?;
    let service = ReportService::with_options(ReportOptions {
        template,
        ..Default::default()
    });

    let format = resolve_format(cli.format, cli.output.as_deref());
    let output = cli
        .output
        .unwrap_or_else(|| default_output(&service.options().default_filename, format));
    let is_stdout = output.as_os_str() == "-";

    let document = service.compile(&input);
    info!("compiled {} blocks from {}", document.len(), cli.input.display());

    let bytes = match format {
        Format::Md => service.render_markdown(&document).into_bytes(),
        Format::Docx => {
            let filename = output.file_name().and_then(|name| name.to_str());
            service.export_document(&document, filename)?.bytes
        }
    };

    if is_stdout {
        std::io::stdout()
            .write_all(&bytes)
            .context("failed to write to stdout")?;
    } else {
        std::fs::write(&output, &bytes)
            .with_context(|| format!("failed to write file {}", output.display()))?;
        info!("wrote {} ({} bytes)", output.display(), bytes.len());
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut body = Vec::new();
        std::io::stdin()
            .read_to_end(&mut body)
            .context("failed to read stdin")?;
        return Ok(body);
    }

    std::fs::read(path).with_context(|| format!("cannot read '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::parse_from([
            "reportdoc",
            "analysis.json",
            "-o",
            "out.md",
            "--english",
            "-vv",
        ]);
        assert_eq!(cli.input, PathBuf::from("analysis.json"));
        assert_eq!(cli.output, Some(PathBuf::from("out.md")));
        assert!(cli.english);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_run_writes_docx_and_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("analysis.json");
        std::fs::write(&input, r#"{"resumen": {"promedio_actual": 2.5}}"#).unwrap();

        let docx = dir.path().join("out.docx");
        run(Cli::parse_from([
            "reportdoc",
            input.to_str().unwrap(),
            "-o",
            docx.to_str().unwrap(),
        ]))
        .unwrap();
        assert!(std::fs::read(&docx).unwrap().starts_with(b"PK"));

        let md = dir.path().join("out.md");
        run(Cli::parse_from([
            "reportdoc",
            input.to_str().unwrap(),
            "-o",
            md.to_str().unwrap(),
        ]))
        .unwrap();
        let rendered = std::fs::read_to_string(&md).unwrap();
        assert!(rendered.contains("Puntaje promedio actual: 2.50"));
    }
}

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use ttl2jsonld_core::config::DEFAULT_ROOT;
use ttl2jsonld_core::{run_with, ConvertOptions, FileOutcome, OutputFormat};

#[derive(Parser)]
#[command(name = "ttl2jsonld")]
#[command(about = "Convert every Turtle ontology file under a directory into JSON-LD")]
#[command(version)]
struct Cli {
    /// Directory searched recursively for .ttl files
    #[arg(default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Output format of the written .jsonld files
    #[arg(long, value_enum, default_value_t = FormatArg::Pretty)]
    format: FormatArg,

    /// Base IRI for relative IRIs (defaults to each file's file:// URL)
    #[arg(long)]
    base_iri: Option<String>,

    /// Follow symbolic links while searching
    #[arg(long)]
    follow_links: bool,

    /// Also search hidden files and directories
    #[arg(long)]
    include_hidden: bool,

    /// Print a JSON summary of the run after the per-file lines
    #[arg(long)]
    summary: bool,

    /// Exit with a failure status when any file fails to convert
    #[arg(long)]
    fail_on_error: bool,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum FormatArg {
    Pretty,
    Compact,
}

impl From<FormatArg> for OutputFormat {
    fn from(val: FormatArg) -> Self {
        match val {
            FormatArg::Pretty => OutputFormat::Pretty,
            FormatArg::Compact => OutputFormat::Compact,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the per-file report
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .init();

    let options = ConvertOptions {
        root: cli.root,
        format: cli.format.into(),
        base_iri: cli.base_iri,
        follow_links: cli.follow_links,
        include_hidden: cli.include_hidden,
        ..ConvertOptions::default()
    };

    let mut stdout = io::stdout().lock();
    let mut report_error = None;
    let summary = run_with(&options, |outcome| {
        if report_error.is_none() {
            report_error = report_outcome(&mut stdout, outcome).err();
        }
    });
    if let Some(err) = report_error {
        return Err(anyhow::Error::from(err).context("Failed to write report"));
    }

    if summary.is_empty() {
        writeln!(
            stdout,
            "No .{} files found in the '{}' directory.",
            options.source_extension,
            options.root.display()
        )
        .context("Failed to write report")?;
    }

    if cli.summary {
        serde_json::to_writer_pretty(&mut stdout, &summary.to_json())
            .context("Failed to write summary")?;
        writeln!(stdout).context("Failed to write trailing newline")?;
    }

    if cli.fail_on_error && summary.has_failures() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn report_outcome(out: &mut impl Write, outcome: &FileOutcome) -> io::Result<()> {
    match &outcome.result {
        Ok(conversion) => writeln!(
            out,
            "Successfully converted {} to {}",
            conversion.source.display(),
            conversion.target.display()
        ),
        Err(err) => writeln!(
            out,
            "Error converting {}: {}",
            outcome.source.display(),
            err
        ),
    }
}

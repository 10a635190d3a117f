//! Extract text from a PDF or DOCX file and print it as JSON
//!
//! Usage:
//!   document-parser report.pdf
//!
//! Stdout is always a single JSON object, `{"text": ..., "success": true}`
//! or `{"error": ..., "success": false}`. Logs go to stderr.

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use hanzo_docparse::{DocumentParser, ExtractResult, ParseError, ParseOutput, ParserConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "document-parser", version)]
#[command(about = "Extract plain text from PDF and DOCX files as JSON")]
struct Args {
    /// Document to extract
    file_path: PathBuf,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail when the extracted text is longer than this many characters
    #[arg(long)]
    max_length: Option<usize>,

    /// Include document metadata in the output
    #[arg(long)]
    metadata: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn load_config(args: &Args) -> anyhow::Result<ParserConfig> {
    let mut config = match &args.config {
        Some(path) => ParserConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ParserConfig::default(),
    };

    if let Some(max) = args.max_length {
        config = config.with_max_length(max);
    }

    Ok(config)
}

fn run(args: &Args) -> Result<ExtractResult, ParseError> {
    let config = load_config(args).map_err(|e| ParseError::Config(format!("{:#}", e)))?;
    DocumentParser::new(config).parse(&args.file_path)
}

fn emit(output: &ParseOutput) -> ExitCode {
    println!("{}", output.to_json());
    ExitCode::from(output.exit_code())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let usage = ParseError::Usage(format!(
                "Usage: document-parser <file_path> ({})",
                err.kind().as_str().unwrap_or("invalid arguments")
            ));
            return emit(&ParseOutput::from(usage));
        }
    };

    init_tracing(args.verbose);

    let output = match run(&args) {
        Ok(result) if args.metadata => ParseOutput::success_with_metadata(result),
        Ok(result) => ParseOutput::success(result),
        Err(e) => {
            error!(path = %args.file_path.display(), error = %e, "Document parsing failed");
            ParseOutput::failure(e)
        }
    };

    emit(&output)
}

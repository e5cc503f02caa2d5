mod registry;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use registry::{RunContext, init_run_logging, start_run, write_report, write_snippet};
use subloop_core::{
    Error as CoreError, OPTIONS_VERSION, SnippetOptions, validate_options, validate_options_json,
};
use subloop_generate::generate_with_report;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Parser, Debug)]
#[command(name = "subloop", version, about = "WordPress sub-loop snippet generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Options document, TOML or JSON by extension.
    #[arg(long, value_name = "PATH")]
    options: PathBuf,
    /// Output directory for runs.
    #[arg(long, default_value = "runs")]
    run_dir: PathBuf,
    /// Optional output path for the snippet.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Escalate validation warnings to errors.
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// Suppress printing the snippet to stdout.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let GenerateArgs {
        options: options_path,
        run_dir,
        out,
        strict,
        quiet,
    } = args;

    let options = load_options(&options_path)?;

    let run_id = Uuid::new_v4().to_string();
    let started_at = chrono::Utc::now();
    let run_ctx = RunContext {
        run_id: run_id.clone(),
        started_at,
        options_version: OPTIONS_VERSION.to_string(),
        strict,
        run_dir,
        out: out.clone(),
        options: options.clone(),
    };

    let run_paths = start_run(&run_ctx)?;
    init_run_logging(&run_paths.logs_path)?;

    tracing::info!(event = "run_started", run_id = %run_id, strict);
    tracing::info!(event = "options_loaded", path = %options_path.display());

    let validation = validate_options(&options);
    for issue in &validation.warnings {
        tracing::warn!(
            event = "validation_warning",
            code = %issue.code,
            path = %issue.path,
            message = %issue.message
        );
    }
    if let Some(first) = validation.errors.first() {
        return Err(CliError::InvalidOptions(format!(
            "{}: {}",
            first.path, first.message
        )));
    }
    if strict && !validation.warnings.is_empty() {
        return Err(CliError::InvalidOptions(format!(
            "{} validation warning(s) escalated by --strict",
            validation.warnings.len()
        )));
    }
    tracing::info!(event = "validation_finished", warnings = validation.warnings.len());

    let (snippet, report) = generate_with_report(&options);
    for issue in &report.omitted {
        tracing::warn!(event = "clause_omitted", code = %issue.code, message = %issue.message);
    }
    tracing::info!(
        event = "snippet_generated",
        clauses = report.clauses.len(),
        display_items = report.display_items.len(),
        omitted = report.omitted.len()
    );

    write_snippet(&run_paths, &snippet, out.as_deref())?;
    tracing::info!(event = "snippet_written", path = %run_paths.snippet_path.display());

    write_report(&run_paths, &report)?;
    tracing::info!(event = "report_written", path = %run_paths.report_path.display());

    tracing::info!(event = "run_finished", status = "success");

    if !quiet {
        println!("{snippet}");
    }

    Ok(())
}

fn load_options(path: &Path) -> Result<SnippetOptions, CliError> {
    let content = fs::read_to_string(path)?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(toml::from_str(&content)?),
        Some("json") => {
            let value: serde_json::Value = serde_json::from_str(&content)?;
            let report = validate_options_json(&value)?;
            if let Some(first) = report.errors.first() {
                return Err(CliError::InvalidOptions(format!(
                    "{}: {}",
                    first.path, first.message
                )));
            }
            Ok(serde_json::from_value(value)?)
        }
        _ => Err(CliError::InvalidConfig(format!(
            "unsupported options format: {}",
            path.display()
        ))),
    }
}

use std::fs::{OpenOptions, create_dir_all};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use subloop_core::SnippetOptions;
use subloop_generate::SnippetReport;

use super::{RegistryError, RegistryResult};

/// Metadata captured at run start.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub options_version: String,
    pub strict: bool,
    pub run_dir: PathBuf,
    pub out: Option<PathBuf>,
    pub options: SnippetOptions,
}

/// JSON config written to each run directory.
#[derive(Debug, Serialize)]
pub struct RunConfig {
    pub run_id: String,
    pub started_at: String,
    pub options_version: String,
    pub strict: bool,
    pub options: SnippetOptions,
}

/// Paths for run artifacts.
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub snippet_path: PathBuf,
    pub report_path: PathBuf,
    pub logs_path: PathBuf,
}

pub fn start_run(ctx: &RunContext) -> RegistryResult<RunPaths> {
    let timestamp = ctx.started_at.format("%Y-%m-%dT%H-%M-%SZ").to_string();
    let run_root = ctx
        .run_dir
        .join(format!("{timestamp}__run_{}", ctx.run_id));

    create_dir_all(&run_root)?;

    let config_path = run_root.join("config.json");
    let snippet_path = run_root.join("snippet.php");
    let report_path = run_root.join("report.json");
    let logs_path = run_root.join("logs.ndjson");

    let config = RunConfig {
        run_id: ctx.run_id.clone(),
        started_at: ctx.started_at.to_rfc3339(),
        options_version: ctx.options_version.clone(),
        strict: ctx.strict,
        options: ctx.options.clone(),
    };

    write_json(&config_path, &config)?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&logs_path)?;

    Ok(RunPaths {
        snippet_path,
        report_path,
        logs_path,
    })
}

/// Write the snippet into the run directory and, when requested, to an
/// explicit output path.
pub fn write_snippet(
    paths: &RunPaths,
    snippet: &str,
    out_path: Option<&Path>,
) -> RegistryResult<()> {
    std::fs::write(&paths.snippet_path, snippet)?;

    if let Some(out_path) = out_path {
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        std::fs::write(out_path, snippet)?;
    }

    Ok(())
}

pub fn write_report(paths: &RunPaths, report: &SnippetReport) -> RegistryResult<()> {
    write_json(&paths.report_path, report)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> RegistryResult<()> {
    let data = serde_json::to_vec_pretty(value)?;
    std::fs::write(path, data).map_err(RegistryError::from)
}

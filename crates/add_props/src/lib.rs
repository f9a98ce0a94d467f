// crates/add_props/src/lib.rs

use anyhow::{Context, Result};
use patch_props::{DefaultFilePatcher, FileOutcome, Outcome, RunReport};

pub mod config;

pub use config::{build_cli, AppConfig};

/// Exit status when every file was updated or skipped.
pub const EXIT_OK: i32 = 0;
/// Exit status when at least one file could not be processed.
pub const EXIT_FILE_ERRORS: i32 = 1;
/// Exit status when the target list could not be built.
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Resolves the target list and patches every file in it.
///
/// Only configuration problems (an unreadable paths file, a missing scan
/// directory) are returned as errors. Per-file failures end up in the report.
pub fn execute(config: &AppConfig) -> Result<RunReport> {
    execute_with(config, |_| {})
}

/// Like `execute`, but hands each file's outcome to `on_outcome` as soon as
/// that file is done.
pub fn execute_with<F>(config: &AppConfig, on_outcome: F) -> Result<RunReport>
where
    F: FnMut(&FileOutcome),
{
    let targets = collect_targets::collect(&config.target_sources())
        .context("Failed to resolve target files")?;
    log::debug!("{} target file(s)", targets.len());

    let patcher = DefaultFilePatcher::new(config.dry_run);
    Ok(patch_props::run_with_callback(&patcher, &targets, on_outcome))
}

/// The line printed for one file. In dry-run mode updates read "Would update".
pub fn status_line(entry: &FileOutcome, dry_run: bool) -> String {
    match entry.outcome {
        Outcome::Updated if dry_run => format!("Would update {}", entry.path.display()),
        _ => entry.status_line(),
    }
}

/// The line printed once the batch is finished.
pub fn summary_line(report: &RunReport) -> String {
    let errors = report.errors();
    format!(
        "Done: {} updated, {} skipped, {} {}",
        report.updated(),
        report.skipped(),
        errors,
        if errors == 1 { "error" } else { "errors" }
    )
}

pub fn exit_code(report: &RunReport) -> i32 {
    if report.has_errors() {
        EXIT_FILE_ERRORS
    } else {
        EXIT_OK
    }
}

// crates/patch_props/src/lib.rs

//! Idempotent insertion of the `{...props}` spread into generated icon files.

use std::path::Path;

pub mod content;
pub mod outcome;
pub mod processor;

pub use content::{patch_content, PatchedContent};
pub use outcome::{FileOutcome, Outcome, RunReport, SkipReason};
pub use processor::{DefaultFilePatcher, FilePatcher};

/// Patches a single file on disk with the default patcher.
pub fn process_file<P: AsRef<Path>>(file_path: P) -> Outcome {
    DefaultFilePatcher::default().process_file(file_path.as_ref())
}

/// Patches every path in order with the default patcher.
pub fn run<P: AsRef<Path>>(paths: &[P]) -> RunReport {
    run_with_patcher(&DefaultFilePatcher::default(), paths)
}

/// Patches every path in order with the given patcher.
pub fn run_with_patcher<P: AsRef<Path>>(patcher: &dyn FilePatcher, paths: &[P]) -> RunReport {
    run_with_callback(patcher, paths, |_| {})
}

/// Patches every path in order, handing each outcome to `on_outcome` as soon
/// as the file is done.
///
/// Each path is handled exactly once and independently: a failure on one file
/// is recorded in the report and the batch moves on to the next path.
pub fn run_with_callback<P, F>(patcher: &dyn FilePatcher, paths: &[P], mut on_outcome: F) -> RunReport
where
    P: AsRef<Path>,
    F: FnMut(&FileOutcome),
{
    let mut report = RunReport::default();
    for path in paths {
        let path = path.as_ref();
        let outcome = patcher.process_file(path);
        log::debug!("{}: {:?}", path.display(), outcome);
        let entry = FileOutcome::new(path, outcome);
        on_outcome(&entry);
        report.push(entry);
    }
    report
}

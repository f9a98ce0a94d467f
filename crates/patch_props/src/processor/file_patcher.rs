// crates/patch_props/src/processor/file_patcher.rs

use std::fs;
use std::path::Path;

use crate::content::{patch_content, PatchedContent};
use crate::outcome::Outcome;

/// Trait that abstracts patching a single file.
pub trait FilePatcher {
    /// Patches the file at the given path. Failures are reported through the
    /// returned outcome, never as a panic or an early return to the caller.
    fn process_file(&self, file_path: &Path) -> Outcome;
}

/// Filesystem implementation of the `FilePatcher` trait.
///
/// Reads the whole file as UTF-8, patches it in memory and overwrites the
/// file when the text changed. With `dry_run` set the write is skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFilePatcher {
    pub dry_run: bool,
}

impl DefaultFilePatcher {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }
}

impl FilePatcher for DefaultFilePatcher {
    fn process_file(&self, file_path: &Path) -> Outcome {
        let content = match fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(err) => return Outcome::Error(err.to_string()),
        };
        log::debug!("read {} bytes from {}", content.len(), file_path.display());

        let new_content = match patch_content(&content) {
            PatchedContent::Unchanged(reason) => return Outcome::Skipped(reason),
            PatchedContent::Changed(new_content) => new_content,
        };

        if self.dry_run {
            log::debug!("dry run: not writing {}", file_path.display());
            return Outcome::Updated;
        }

        match fs::write(file_path, new_content) {
            Ok(()) => Outcome::Updated,
            Err(err) => Outcome::Error(err.to_string()),
        }
    }
}

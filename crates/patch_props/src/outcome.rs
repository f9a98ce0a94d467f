// crates/patch_props/src/outcome.rs

use std::fmt;
use std::path::{Path, PathBuf};

use props_marker::SPREAD_MARKER;

/// Why a file was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyPatched,
    AnchorNotFound,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::AlreadyPatched => write!(f, "already has {}", SPREAD_MARKER),
            SkipReason::AnchorNotFound => write!(f, "standard attribute not found"),
        }
    }
}

/// Per-file result of a patch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    Skipped(SkipReason),
    Error(String),
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Outcome::Updated)
    }
}

/// An outcome tied to the path it was produced for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub outcome: Outcome,
}

impl FileOutcome {
    pub fn new(path: &Path, outcome: Outcome) -> Self {
        Self {
            path: path.to_path_buf(),
            outcome,
        }
    }

    /// The human readable line printed for this file.
    pub fn status_line(&self) -> String {
        let path = self.path.display();
        match &self.outcome {
            Outcome::Updated => format!("Updated {}", path),
            Outcome::Skipped(reason) => format!("Skipping {}, {}", path, reason),
            Outcome::Error(message) => format!("Error processing {}: {}", path, message),
        }
    }
}

/// Ordered outcomes of one batch, one entry per input path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn updated(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_update()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, Outcome::Skipped(_)))
            .count()
    }

    pub fn errors(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_error()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors() > 0
    }
}

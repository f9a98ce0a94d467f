// crates/patch_props/src/content.rs

use props_marker::{anchored_insertion, ANCHOR, SPREAD_MARKER};

use crate::outcome::SkipReason;

/// Result of transforming a file's text in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchedContent {
    /// The text must be left as is.
    Unchanged(SkipReason),
    /// The new text to write back.
    Changed(String),
}

/// Inserts the spread marker after every occurrence of the anchor attribute.
///
/// The checks run in a fixed order:
///   1. Content that already holds the marker anywhere is left alone.
///   2. Content without the anchor is left alone.
///   3. Otherwise every anchor occurrence is followed by a newline, 8 spaces
///      and the marker. Nothing else in the text moves.
pub fn patch_content(content: &str) -> PatchedContent {
    if content.contains(SPREAD_MARKER) {
        return PatchedContent::Unchanged(SkipReason::AlreadyPatched);
    }

    let occurrences = content.matches(ANCHOR).count();
    if occurrences == 0 {
        return PatchedContent::Unchanged(SkipReason::AnchorNotFound);
    }
    if occurrences > 1 {
        log::debug!("anchor found {} times; patching every occurrence", occurrences);
    }

    PatchedContent::Changed(content.replace(ANCHOR, &anchored_insertion()))
}

// crates/props_marker/src/lib.rs

//! Literals shared by the icon patching tool‑chain.

/// The spread attribute that forwards caller props onto the root `<svg>`.
pub const SPREAD_MARKER: &str = "{...props}";

/// The attribute every generated icon carries on its root tag.
/// The marker is inserted right after it.
pub const ANCHOR: &str = "strokeLinejoin=\"round\"";

/// Indentation of the inserted marker line (exactly 8 spaces).
pub const MARKER_INDENT: &str = "        ";

/// The text inserted after the anchor: a newline, the indentation and the marker.
pub fn marker_line() -> String {
    format!("\n{}{}", MARKER_INDENT, SPREAD_MARKER)
}

/// The text that replaces each anchor occurrence.
pub fn anchored_insertion() -> String {
    format!("{}{}", ANCHOR, marker_line())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_indent_is_eight_spaces() {
        assert_eq!(MARKER_INDENT.len(), 8);
        assert!(MARKER_INDENT.chars().all(|c| c == ' '));
    }

    #[test]
    fn test_anchored_insertion_shape() {
        assert_eq!(
            anchored_insertion(),
            "strokeLinejoin=\"round\"\n        {...props}"
        );
    }
}

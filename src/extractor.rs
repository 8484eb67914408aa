//! Image declaration detection and reference extraction.
//!
//! A manifest line declares an image when its trimmed text starts with
//! `image:` or contains a dotted key ending in `.image:` such as
//! `sidecar.image:`. The reference is whatever follows the last `image:`
//! marker on the line. This is a textual heuristic, not a YAML parse: a
//! value that itself contains `image:` will be split at the rightmost marker.

use crate::text;
use serde::Serialize;

/// Literal token separating a key from the image reference.
pub const MARKER: &str = "image:";

const NESTED_MARKER: &str = ".image:";

/// An image reference found in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    /// Line number in the manifest, 1-indexed.
    pub line: usize,
    /// Extracted reference, possibly empty.
    pub image: String,
    /// Reference with its registry replaced, when a target registry was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewritten: Option<String>,
}

/// Returns true if `raw_line` looks like an image declaration.
pub fn is_image_line(raw_line: &str) -> bool {
    let line = raw_line.trim();
    line.starts_with(MARKER) || line.contains(NESTED_MARKER)
}

/// Returns the trimmed text after the last `image:` in `raw_line`.
///
/// Yields `""` when the marker is missing or nothing follows it.
pub fn extract_reference(raw_line: &str) -> &str {
    text::after(raw_line, MARKER).trim()
}

/// Filters image declarations out of `lines` and extracts their references.
///
/// Input order is preserved and duplicates are kept.
pub fn extract_images<S: AsRef<str>>(lines: &[S]) -> Vec<ImageRef> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_image_line(line.as_ref()))
        .map(|(idx, line)| ImageRef {
            line: idx + 1,
            image: extract_reference(line.as_ref()).to_string(),
            rewritten: None,
        })
        .collect()
}

//! Rendering of extracted references.

use crate::extractor::ImageRef;
use crate::rewriter;
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Writes one reference per line, preferring the rewritten form.
pub fn write_plain(out: &mut impl Write, refs: &[ImageRef]) -> Result<()> {
    for image_ref in refs {
        let value = image_ref.rewritten.as_deref().unwrap_or(&image_ref.image);
        writeln!(out, "{}", value).context("Failed to write output")?;
    }
    Ok(())
}

/// Writes the references as a pretty-printed JSON array.
pub fn write_json(out: &mut impl Write, refs: &[ImageRef]) -> Result<()> {
    let json = serde_json::to_string_pretty(refs).context("Failed to serialize references")?;
    writeln!(out, "{}", json).context("Failed to write output")?;
    Ok(())
}

/// Writes `<reference> => <rewritten>` for each sample reference.
pub fn write_demo(out: &mut impl Write, new_registry: &str) -> Result<()> {
    for reference in rewriter::DEMO_REFERENCES {
        writeln!(
            out,
            "{} => {}",
            reference,
            rewriter::change_registry(reference, new_registry)
        )
        .context("Failed to write output")?;
    }
    Ok(())
}

/// Returns true if `err` stems from the reader closing stdout early,
/// as in `manifest-images | head -1`.
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
}

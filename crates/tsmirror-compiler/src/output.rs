//! Output file writing.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Write `text` to `path` via a temporary file in the same directory.
///
/// The target is either left untouched or fully replaced; a failed run never
/// leaves a half-written file behind. The parent directory must exist.
pub fn write_atomic(path: &Path, text: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}

use std::fs::{self, DirEntry};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

/// Immediate regular files of `dir`, in whatever order the file system
/// yields them. Subdirectories and symlinks are ignored; the file-type
/// check does not follow symlinks. Entries whose metadata cannot be read
/// are logged and skipped.
pub fn map_files(dir: &Path) -> Result<impl Iterator<Item = DirEntry>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Cannot read map directory {}", dir.display()))?;

    Ok(entries.filter_map(|entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Could not read directory entry: {e}");
                return None;
            }
        };
        match entry.file_type() {
            Ok(file_type) if file_type.is_file() => Some(entry),
            Ok(_) => None,
            Err(e) => {
                warn!("Could not stat {}: {e}", entry.path().display());
                None
            }
        }
    }))
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

/// Moves matched map files into the output directory, creating the
/// directory lazily on the first move of the run.
#[derive(Debug)]
pub struct Relocator {
    outdir: PathBuf,
    outdir_ready: bool,
}

impl Relocator {
    pub fn new(outdir: PathBuf) -> Self {
        Self {
            outdir,
            outdir_ready: false,
        }
    }

    /// Move `src` into the output directory, keeping its file name.
    ///
    /// Returns `Ok(true)` if the file was moved and `Ok(false)` if the
    /// move was skipped: the name already exists at the destination, or
    /// the rename itself failed. Only failure to create the output
    /// directory is fatal, since no later file could be saved either.
    pub fn relocate(&mut self, src: &Path) -> Result<bool> {
        let Some(name) = src.file_name() else {
            return Ok(false);
        };

        if !self.outdir_ready {
            self.ensure_outdir()?;
            self.outdir_ready = true;
        }

        let dest = self.outdir.join(name);
        if dest.exists() {
            warn!(
                "Cannot move file {}: it already exists in target directory.",
                name.to_string_lossy()
            );
            return Ok(false);
        }
        if let Err(e) = fs::rename(src, &dest) {
            warn!("Cannot move file {}: {e}", name.to_string_lossy());
            return Ok(false);
        }
        Ok(true)
    }

    fn ensure_outdir(&self) -> Result<()> {
        if self.outdir.exists() {
            return Ok(());
        }
        fs::create_dir(&self.outdir).context("Cannot create output directory.")?;
        Ok(())
    }
}

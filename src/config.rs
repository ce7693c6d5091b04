use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::sizes::SizeFilter;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub mapdir: PathBuf,
    pub outputdir: PathBuf,
    pub sizes: SizeFilter,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        Self::from_args(Cli::parse())
    }

    /// Build a Config from already-parsed arguments. The requested size
    /// labels are validated here, before any file is touched.
    pub fn from_args(cli: Cli) -> Result<Self> {
        let sizes = SizeFilter::parse(&cli.size)?;
        Ok(Config {
            mapdir: cli.mapdir,
            outputdir: cli.outputdir,
            sizes,
        })
    }
}

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "map-locator", version)]
#[command(
    about = "Locate compressed map files by the size code embedded in their header, then move \
                   the matches into an output directory."
)]
pub struct Cli {
    /// Map sizes to locate: comma-separated list of S, M, L, XL, H, EH, G (case-insensitive).
    #[arg(short = 's', long = "size")]
    pub size: String,

    /// Directory where to locate maps.
    #[arg(short = 'm', long = "mapdir")]
    pub mapdir: PathBuf,

    /// Directory where to store found maps.
    #[arg(short = 'o', long = "outputdir")]
    pub outputdir: PathBuf,
}

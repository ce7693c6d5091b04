use anyhow::Result;

use crate::classify;
use crate::config::Config;
use crate::relocate::Relocator;
use crate::scan;

/// Totals for one run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub scanned: usize,
    pub matched: usize,
    pub moved: usize,
}

/// The enumerate → decompress → classify → move pipeline, run over the
/// immediate files of the map directory, one file at a time.
pub struct Locator {
    config: Config,
}

impl Locator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut relocator = Relocator::new(self.config.outputdir.clone());

        for entry in scan::map_files(&self.config.mapdir)? {
            summary.scanned += 1;
            let path = entry.path();

            let Some(stream) = classify::open_map(&path) else {
                continue;
            };
            if !classify::classify(stream, &self.config.sizes) {
                continue;
            }
            summary.matched += 1;

            if relocator.relocate(&path)? {
                summary.moved += 1;
            }
        }

        Ok(summary)
    }
}

use anyhow::Result;
use map_locator::config::Config;
use map_locator::locator::Locator;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_cli()?;
    let summary = Locator::new(config).run()?;

    println!(
        "Scanned {} files, matched {}, moved {}.",
        summary.scanned, summary.matched, summary.moved
    );
    Ok(())
}

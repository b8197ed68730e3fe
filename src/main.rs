use anyhow::Result;
use bump_readme::{arguments::Arguments, readme};
use clap::Parser;
use log::{LevelFilter, info};

fn main() -> Result<()> {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    // Checked before the file is touched
    let version = args.resolve_version()?;

    let updated = readme::update_version(&args.path, &args.artifact, version)?;
    info!("Updated {} version string(s) to {}", updated, version);

    Ok(())
}

use anyhow::{Context, Result};
use log::{debug, info, warn};
use semver::Version;
use std::path::Path;

use crate::patterns::{count_matches, substitute};

/// Rewrites the version strings in the file at `path` and returns how many were found.
///
/// The file is read in full and written back once, after every pattern has
/// been applied. Nothing is written if reading fails.
pub fn update_version(path: impl AsRef<Path>, artifact: &str, version: &str) -> Result<usize> {
    let path = path.as_ref();
    info!("Updating {} to {}", path.display(), version);

    if Version::parse(version).is_err() {
        warn!("'{}' is not a valid semantic version, applying it as-is", version);
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;
    let found = count_matches(&contents, artifact)?;
    if found == 0 {
        warn!("No '{}' version strings found in {}", artifact, path.display());
    }

    let new_contents = substitute(&contents, artifact, version)?;
    std::fs::write(path, new_contents)
        .with_context(|| format!("Failed to write {:?}", path))?;

    debug!("Rewrote {} version string(s) in {}", found, path.display());
    Ok(found)
}

use anyhow::Result;
use log::debug;
use regex::{Captures, Regex};

pub mod dependency_call;
pub mod dependency_string;
pub mod version_assignment;

use dependency_call::DependencyCallPattern;
use dependency_string::DependencyStringPattern;
use version_assignment::VersionAssignmentPattern;

/// Numeric version, dotted or not, with an optional pre-release or build suffix
pub(crate) const VERSION_SEGMENT: &str = r"\d+(?:\.\d+)*(?:[-+][0-9A-Za-z.+-]*)?";

/// A fixed textual shape that embeds a version.
///
/// `version_match_regex` must expose exactly three groups: the prefix, the
/// version and the suffix. Only the second group is ever rewritten.
pub trait VersionPattern {
    const NAME: &'static str;

    fn version_match_regex(artifact: &str) -> Result<Regex>;

    fn replace_all(content: &str, artifact: &str, version: &str) -> Result<String> {
        let version_regex = Self::version_match_regex(artifact)?;
        let replaced = version_regex.replace_all(content, |captures: &Captures| {
            format!("{}{}{}", &captures[1], version, &captures[3])
        });
        Ok(replaced.into_owned())
    }

    fn count(content: &str, artifact: &str) -> Result<usize> {
        let count = Self::version_match_regex(artifact)?
            .find_iter(content)
            .count();
        debug!("{} matched {} time(s)", Self::NAME, count);
        Ok(count)
    }
}

/// Rewrites every recognized version token in `content` to `version`
pub fn substitute(content: &str, artifact: &str, version: &str) -> Result<String> {
    let content = DependencyStringPattern::replace_all(content, artifact, version)?;
    let content = DependencyCallPattern::replace_all(&content, artifact, version)?;
    VersionAssignmentPattern::replace_all(&content, artifact, version)
}

pub fn count_matches(content: &str, artifact: &str) -> Result<usize> {
    Ok(DependencyStringPattern::count(content, artifact)?
        + DependencyCallPattern::count(content, artifact)?
        + VersionAssignmentPattern::count(content, artifact)?)
}

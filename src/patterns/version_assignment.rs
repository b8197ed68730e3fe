use crate::patterns::{VERSION_SEGMENT, VersionPattern};
use regex::Regex;

/// `<artifact> = "<version>"`, as in a Gradle version catalog or a `val`/`ext.` property.
///
/// The artifact must not be glued to a preceding word or hyphen.
pub struct VersionAssignmentPattern;

impl VersionPattern for VersionAssignmentPattern {
    const NAME: &'static str = "version assignment";

    fn version_match_regex(artifact: &str) -> anyhow::Result<Regex> {
        Ok(Regex::new(&format!(
            r#"((?:^|[^\w-]){}\s*=\s*")({VERSION_SEGMENT})(")"#,
            regex::escape(artifact)
        ))?)
    }
}

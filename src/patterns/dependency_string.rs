use crate::patterns::{VERSION_SEGMENT, VersionPattern};
use regex::Regex;

/// `implementation "io.github.<owner>:<artifact>:<version>"`, single or double quoted.
///
/// The opening and closing quotes are matched independently, so `"…'` is accepted too.
pub struct DependencyStringPattern;

impl VersionPattern for DependencyStringPattern {
    const NAME: &'static str = "dependency string";

    fn version_match_regex(artifact: &str) -> anyhow::Result<Regex> {
        Ok(Regex::new(&format!(
            r#"(implementation\s*["']io\.github\.[\w.-]+:{}:)({VERSION_SEGMENT})(["'])"#,
            regex::escape(artifact)
        ))?)
    }
}

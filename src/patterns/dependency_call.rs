use crate::patterns::{VERSION_SEGMENT, VersionPattern};
use regex::Regex;

/// `implementation("io.github.<owner>:<artifact>:<version>")`, as written in Kotlin build scripts.
///
/// The call may be split across lines. Quotes are matched independently, like
/// [`DependencyStringPattern`](super::dependency_string::DependencyStringPattern).
pub struct DependencyCallPattern;

impl VersionPattern for DependencyCallPattern {
    const NAME: &'static str = "dependency call";

    fn version_match_regex(artifact: &str) -> anyhow::Result<Regex> {
        Ok(Regex::new(&format!(
            r#"(implementation\(\s*["']io\.github\.[\w.-]+:{}:)({VERSION_SEGMENT})(["']\s*\))"#,
            regex::escape(artifact)
        ))?)
    }
}

use clap::Parser;

use crate::VERSION_ENV;
use crate::errors::SubstitutionError;

pub const DEFAULT_ARTIFACT: &str = "shapeindicators";

#[derive(Debug, Parser)]
#[command(author, version, about, bin_name = "bump-readme")]
pub struct Arguments {
    /// File whose version strings are rewritten
    #[arg(long, short, default_value = "README.md")]
    pub path: String,
    /// Artifact name the dependency coordinates and catalog entry are keyed on
    #[arg(long, short, default_value = DEFAULT_ARTIFACT)]
    pub artifact: String,
    #[arg(long, short)]
    pub verbose: bool,
    #[arg(env = VERSION_ENV)]
    pub new_version: Option<String>,
}

impl Arguments {
    /// Returns the version to apply, rejecting an absent or empty value
    pub fn resolve_version(&self) -> Result<&str, SubstitutionError> {
        self.new_version
            .as_deref()
            .filter(|version| !version.is_empty())
            .ok_or(SubstitutionError::MissingVersion(VERSION_ENV))
    }
}

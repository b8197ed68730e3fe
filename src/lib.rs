pub mod arguments;
pub mod errors;
pub mod patterns;
pub mod readme;

/// Environment variable the release pipeline exports the new version in
pub const VERSION_ENV: &str = "LATEST_VERSION";

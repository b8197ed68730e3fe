use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubstitutionError {
    #[error("No version supplied: set {0} or pass it as an argument")]
    MissingVersion(&'static str),
}

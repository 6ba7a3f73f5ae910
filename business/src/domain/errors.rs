/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.decode")]
    Decode,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.unavailable")]
    Unavailable,
}

impl RepositoryError {
    pub fn decode() -> Self {
        RepositoryError::Decode
    }
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
    pub fn unavailable() -> Self {
        RepositoryError::Unavailable
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BasketError {
    #[error("basket.user_name_empty")]
    UserNameEmpty,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

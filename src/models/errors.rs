use thiserror::Error;

/// Result alias for service layer operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result alias for repository layer operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by the data access layer
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("menu storage lock was poisoned")]
    LockPoisoned,
}

/// Errors surfaced by the service layer
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Repository error: {source}")]
    Repository {
        #[from]
        source: RepositoryError,
    },
}

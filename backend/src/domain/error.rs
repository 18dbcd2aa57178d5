use thiserror::Error;

/// Errors a guest or manager can cause, as opposed to infrastructure
/// failures. The REST layer maps these to 4xx responses and everything else
/// to 500.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A booking form or request failed validation.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

impl DomainError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        DomainError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

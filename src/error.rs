use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Request body or path parameter failed validation
    #[error("invalid request: {0}")]
    Validation(String),

    /// User with given ID not found
    #[error("user {0} not found")]
    UserNotFound(Uuid),

    /// Product with given ID not found
    #[error("product {0} not found")]
    ProductNotFound(Uuid),

    /// Email is already registered
    #[error("email {0} already registered")]
    EmailAlreadyRegistered(String),

    /// Login failed; deliberately does not say whether the email or the
    /// password was wrong
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Bearer token failed signature or expiry checks
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Token could not be signed
    #[error("failed to sign token: {0}")]
    Signing(String),

    /// Database operation failed
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StorefrontError {
    fn from(err: sqlx::Error) -> Self {
        StorefrontError::Database(err.to_string())
    }
}

use std::sync::Arc;
use tracing::warn;

use crate::error::StorefrontError;
use crate::store::Store;

pub mod jwt;

pub use jwt::{Claims, JwtService, TOKEN_TTL_HOURS};

/// Issues bearer tokens for credential pairs. Reads user records through the
/// store gateway but never mutates them.
pub struct AuthService {
    store: Arc<dyn Store>,
    jwt: JwtService,
}

impl AuthService {
    pub fn new(store: Arc<dyn Store>, jwt_secret: &str) -> Self {
        AuthService {
            store,
            jwt: JwtService::new(jwt_secret),
        }
    }

    /// Validate a credential pair and issue a signed token.
    ///
    /// Unknown email and wrong password both map to `InvalidCredentials` so
    /// the response does not reveal which check failed.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, StorefrontError> {
        let user = self
            .store
            .find_user_by_email(email)
            .await?
            .ok_or(StorefrontError::InvalidCredentials)?;

        if user.password != password {
            warn!("failed login attempt for {}", email);
            return Err(StorefrontError::InvalidCredentials);
        }

        self.jwt.generate_token(&user.email)
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, StorefrontError> {
        self.jwt.validate_token(token)
    }
}

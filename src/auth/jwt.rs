use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;

/// Issued tokens are valid for 72 hours from issuance.
pub const TOKEN_TTL_HOURS: i64 = 72;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub email: String,
    pub exp: usize,
}

/// Signs and verifies bearer tokens with a symmetric secret. The secret is
/// loaded once at startup and never rotated during the process lifetime.
pub struct JwtService {
    secret: String,
}

impl JwtService {
    pub fn new(secret: impl Into<String>) -> Self {
        JwtService { secret: secret.into() }
    }

    pub fn generate_token(&self, email: &str) -> Result<String, StorefrontError> {
        let expiration = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize;

        let claims = Claims {
            email: email.to_string(),
            exp: expiration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| StorefrontError::Signing(e.to_string()))
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, StorefrontError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| StorefrontError::InvalidToken(e.to_string()))?;

        Ok(token_data.claims)
    }
}

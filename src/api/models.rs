use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::StorefrontError;
use crate::models::{Product, User};

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Optional `?name=` contains-filter on list endpoints.
#[derive(Deserialize)]
pub struct ListParams {
    pub name: Option<String>,
}

/// Client-facing view of a user. Built field by field so the stored
/// password can never leak through a serializer annotation.
#[derive(Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for StorefrontError to implement IntoResponse
pub struct ApiError(pub StorefrontError);

impl From<StorefrontError> for ApiError {
    fn from(err: StorefrontError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0 {
            StorefrontError::Validation(_) => StatusCode::BAD_REQUEST,
            StorefrontError::UserNotFound(_) | StorefrontError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            StorefrontError::EmailAlreadyRegistered(_) => StatusCode::CONFLICT,
            StorefrontError::InvalidCredentials | StorefrontError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            StorefrontError::Signing(_) | StorefrontError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: StorefrontError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn errors_map_to_expected_status_codes() {
        assert_eq!(
            status_of(StorefrontError::Validation("bad id".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(StorefrontError::UserNotFound(Uuid::new_v4())), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(StorefrontError::ProductNotFound(Uuid::new_v4())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(StorefrontError::EmailAlreadyRegistered("a@b.c".to_string())),
            StatusCode::CONFLICT
        );
        assert_eq!(status_of(StorefrontError::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(StorefrontError::Signing("no secret".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn credential_errors_share_one_message() {
        // Unknown email and wrong password must be indistinguishable.
        assert_eq!(StorefrontError::InvalidCredentials.to_string(), "invalid credentials");
    }
}

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::models::{
    CreateProductRequest, CreateUserRequest, ErrorResponse, LoginRequest, LoginResponse, ProductResponse, UserResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::login,
        super::handlers::create_user,
        super::handlers::list_users,
        super::handlers::get_user,
        super::handlers::create_product,
        super::handlers::list_products,
        super::handlers::get_product
    ),
    components(schemas(
        LoginRequest,
        LoginResponse,
        CreateUserRequest,
        CreateProductRequest,
        UserResponse,
        ProductResponse,
        ErrorResponse
    )),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "Bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

use axum::{
    Json, Router,
    extract::{Path, Query, Request, State},
    http::{StatusCode, header},
    middleware::{self, Next},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::AppState;
use crate::api::models::{
    ApiError, CreateProductRequest, CreateUserRequest, ErrorResponse, ListParams, LoginRequest, LoginResponse,
    ProductResponse, UserResponse,
};
use crate::error::StorefrontError;
use crate::models::{NewProduct, NewUser};

/// Middleware to validate the bearer token on protected routes.
async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| StorefrontError::InvalidToken("missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| StorefrontError::InvalidToken("invalid Authorization header".to_string()))?;

    let claims = state.auth.validate_token(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

// Define API routes
pub fn api_routes(state: Arc<AppState>) -> Router {
    let protected_routes = Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", get(get_product))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/", get(home))
        .route("/login", post(login))
        .route("/users", post(create_user)) // Signup stays open
        .merge(protected_routes)
        .with_state(state)
}

async fn home() -> Html<&'static str> {
    Html("<!doctype html><html><head><title>storefront</title></head><body><h1>storefront</h1><p>See <a href=\"/swagger-ui\">/swagger-ui</a> for the API.</p></body></html>")
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|e| ApiError(StorefrontError::Validation(format!("malformed id: {}", e))))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn login(State(state): State<Arc<AppState>>, Json(req): Json<LoginRequest>) -> Result<Json<LoginResponse>, ApiError> {
    let token = state.auth.login(&req.email, &req.password).await?;
    Ok(Json(LoginResponse { token }))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    )
)]
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state
        .store
        .create_user(NewUser {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[utoipa::path(
    get,
    path = "/users",
    params(("name" = Option<String>, Query, description = "Filter users whose name contains this value")),
    responses(
        (status = 200, description = "List of users", body = [UserResponse]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.store.list_users(params.name.as_deref()).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 400, description = "Malformed identifier", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn get_user(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_id(&id)?;
    let user = state.store.get_user(id).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let product = state
        .store
        .create_product(NewProduct {
            name: req.name,
            description: req.description,
            price: req.price,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

#[utoipa::path(
    get,
    path = "/products",
    params(("name" = Option<String>, Query, description = "Filter products whose name contains this value")),
    responses(
        (status = 200, description = "List of products", body = [ProductResponse]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = state.store.list_products(params.name.as_deref()).await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = String, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "The product", body = ProductResponse),
        (status = 400, description = "Malformed identifier", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let id = parse_id(&id)?;
    let product = state.store.get_product(id).await?;
    Ok(Json(product.into()))
}

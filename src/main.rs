use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::header;
use storefront::api::openapi::ApiDoc;
use storefront::api::{AppState, api_routes};
use storefront::config::CONFIG;
use storefront::store::sqlite::SqliteStore;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter(CONFIG.log_level.as_str()).init();

    // A store connection failure at startup is fatal to the process.
    let store = Arc::new(SqliteStore::connect(&CONFIG.database_url).await?);
    let state = Arc::new(AppState::new(store, &CONFIG.jwt_secret));

    let app = api_routes(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([http::Method::GET, http::Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

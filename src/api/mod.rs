use std::sync::Arc;

use crate::auth::AuthService;
use crate::store::Store;

pub mod handlers;
pub mod models;
pub mod openapi;

pub use handlers::api_routes;

/// Shared handler state, constructed once at startup.
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, jwt_secret: &str) -> Self {
        AppState {
            auth: AuthService::new(store.clone(), jwt_secret),
            store,
        }
    }
}

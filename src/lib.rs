pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod id;
pub mod models;
pub mod store;

pub use auth::AuthService;
pub use error::StorefrontError;
pub use store::Store;
pub use store::sqlite::SqliteStore;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StorefrontError;
use crate::models::{NewProduct, NewUser, Product, User};

pub mod sqlite;

/// Gateway to the relational store. Owns the canonical representation of
/// users and products; identifier assignment happens here, before every
/// insert.
#[async_trait]
pub trait Store: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, StorefrontError>;
    async fn get_user(&self, id: Uuid) -> Result<User, StorefrontError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StorefrontError>;
    /// List users, optionally filtered to names containing `name`.
    async fn list_users(&self, name: Option<&str>) -> Result<Vec<User>, StorefrontError>;

    async fn create_product(&self, product: NewProduct) -> Result<Product, StorefrontError>;
    async fn get_product(&self, id: Uuid) -> Result<Product, StorefrontError>;
    async fn list_products(&self, name: Option<&str>) -> Result<Vec<Product>, StorefrontError>;
}

use async_trait::async_trait;
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use std::str::FromStr;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::StorefrontError;
use crate::id;
use crate::models::{NewProduct, NewUser, Product, User};
use crate::store::Store;

/// SQLite-backed record store. `DATABASE_URL` decides whether it is
/// file-backed or in-memory (`sqlite::memory:`).
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to the database and apply migrations. A failure here is
    /// fatal to the process; callers do not retry.
    pub async fn connect(database_url: &str) -> Result<Self, StorefrontError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Each connection to sqlite::memory: is its own empty database, so
        // an in-memory store must stay on a single connection.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;
        info!("connected to database at {}", database_url);

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<(), StorefrontError> {
        const MIGRATIONS: &[&str] = &[
            include_str!("../../migrations/0001_create_users.sql"),
            include_str!("../../migrations/0002_create_products.sql"),
        ];

        for migration in MIGRATIONS {
            sqlx::query(migration).execute(pool).await?;
        }

        Ok(())
    }

    fn user_from_row(row: &SqliteRow) -> Result<User, StorefrontError> {
        Ok(User {
            id: parse_stored_id(&row.get::<String, _>("id"))?,
            name: row.get("name"),
            email: row.get("email"),
            password: row.get("password"),
        })
    }

    fn product_from_row(row: &SqliteRow) -> Result<Product, StorefrontError> {
        Ok(Product {
            id: parse_stored_id(&row.get::<String, _>("id"))?,
            name: row.get("name"),
            description: row.get("description"),
            price: row.get("price"),
        })
    }
}

fn parse_stored_id(raw: &str) -> Result<Uuid, StorefrontError> {
    Uuid::parse_str(raw).map_err(|e| StorefrontError::Database(format!("malformed id in store: {}", e)))
}

#[async_trait]
impl Store for SqliteStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StorefrontError> {
        // The identifier is assigned here, once, before the insert.
        let id = id::generate();
        let result = sqlx::query("INSERT INTO users (id, name, email, password) VALUES (?, ?, ?, ?)")
            .bind(id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => {}
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                return Err(StorefrontError::EmailAlreadyRegistered(user.email));
            }
            Err(e) => return Err(e.into()),
        }

        debug!("created user {}", id);
        Ok(User {
            id,
            name: user.name,
            email: user.email,
            password: user.password,
        })
    }

    async fn get_user(&self, id: Uuid) -> Result<User, StorefrontError> {
        let row = sqlx::query("SELECT id, name, email, password FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorefrontError::UserNotFound(id))?;

        Self::user_from_row(&row)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StorefrontError> {
        let row = sqlx::query("SELECT id, name, email, password FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::user_from_row).transpose()
    }

    async fn list_users(&self, name: Option<&str>) -> Result<Vec<User>, StorefrontError> {
        let rows = match name {
            Some(name) => {
                sqlx::query("SELECT id, name, email, password FROM users WHERE name LIKE '%' || ? || '%'")
                    .bind(name)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query("SELECT id, name, email, password FROM users")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.iter().map(Self::user_from_row).collect()
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, StorefrontError> {
        let id = id::generate();
        sqlx::query("INSERT INTO products (id, name, description, price) VALUES (?, ?, ?, ?)")
            .bind(id.to_string())
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .execute(&self.pool)
            .await?;

        debug!("created product {}", id);
        Ok(Product {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
        })
    }

    async fn get_product(&self, id: Uuid) -> Result<Product, StorefrontError> {
        let row = sqlx::query("SELECT id, name, description, price FROM products WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorefrontError::ProductNotFound(id))?;

        Self::product_from_row(&row)
    }

    async fn list_products(&self, name: Option<&str>) -> Result<Vec<Product>, StorefrontError> {
        let rows = match name {
            Some(name) => {
                sqlx::query("SELECT id, name, description, price FROM products WHERE name LIKE '%' || ? || '%'")
                    .bind(name)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query("SELECT id, name, description, price FROM products")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.iter().map(Self::product_from_row).collect()
    }
}

mod api_tests;

use std::sync::Arc;

use crate::store::sqlite::SqliteStore;

pub async fn create_test_store() -> Arc<SqliteStore> {
    Arc::new(
        SqliteStore::connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory store"),
    )
}

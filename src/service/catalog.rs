//! Reference data reads: categories and users.

use crate::error::AppError;
use crate::model::{Category, User};
use crate::store::Store;

pub struct CatalogService;

impl CatalogService {
    pub async fn categories(store: &Store) -> Result<Vec<Category>, AppError> {
        Ok(
            sqlx::query_as::<_, Category>("SELECT slug, description FROM categories")
                .fetch_all(store.pool())
                .await?,
        )
    }

    pub async fn users(store: &Store) -> Result<Vec<User>, AppError> {
        Ok(
            sqlx::query_as::<_, User>("SELECT username, name, avatar_url FROM users")
                .fetch_all(store.pool())
                .await?,
        )
    }
}

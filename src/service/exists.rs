//! Existence gate used before operations that reference a parent row.

use crate::error::AppError;
use crate::store::Store;
use sqlx::postgres::Postgres;

/// Confirm a row exists or fail with the shared not-found message. Table and
/// column are `&'static str` so identifiers only ever come from call-site
/// literals; the value is bound as a parameter. Side-effect-free.
pub async fn check_exists<V>(
    store: &Store,
    table: &'static str,
    column: &'static str,
    value: V,
) -> Result<(), AppError>
where
    V: for<'q> sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres> + Send + 'static,
{
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE {} = $1)", table, column);
    tracing::debug!(sql = %sql, "existence check");
    let exists: bool = sqlx::query_scalar(&sql)
        .bind(value)
        .fetch_one(store.pool())
        .await?;
    if exists {
        Ok(())
    } else {
        Err(AppError::NotFound("Resource not found".into()))
    }
}

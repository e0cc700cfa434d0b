//! Store client: explicitly constructed at startup, injected through
//! `AppState`, torn down with `close`. Also owns the idempotent table DDL.

use crate::config::AppConfig;
use crate::error::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Wraps the connection pool so call sites never reach for an ambient handle.
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;
        Ok(Store { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Store { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Readiness probe.
    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await.is_ok()
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Create the four tables if absent. Categories and users are reference
    /// data keyed by their natural identifiers; reviews and comments carry
    /// generated integer keys.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        const DDL: &[&str] = &[
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                slug VARCHAR PRIMARY KEY,
                description VARCHAR NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS users (
                username VARCHAR PRIMARY KEY,
                name VARCHAR NOT NULL,
                avatar_url VARCHAR NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS reviews (
                review_id SERIAL PRIMARY KEY,
                title VARCHAR NOT NULL,
                category VARCHAR NOT NULL REFERENCES categories(slug),
                designer VARCHAR NOT NULL,
                owner VARCHAR NOT NULL REFERENCES users(username),
                review_body VARCHAR NOT NULL,
                review_img_url VARCHAR NOT NULL,
                votes INT NOT NULL DEFAULT 0,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS comments (
                comment_id SERIAL PRIMARY KEY,
                review_id INT NOT NULL REFERENCES reviews(review_id) ON DELETE CASCADE,
                author VARCHAR NOT NULL REFERENCES users(username),
                body VARCHAR NOT NULL,
                votes INT NOT NULL DEFAULT 0,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        ];
        for ddl in DDL {
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        Ok(())
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects
/// to the default `postgres` database to run CREATE DATABASE. Call before
/// constructing the store.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_name_is_taken_from_url_path() {
        let (admin, name) =
            parse_db_name_from_url("postgres://localhost:5432/tabletop?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://localhost:5432/postgres");
        assert_eq!(name, "tabletop");
    }

    #[test]
    fn quoted_identifier_escapes_quotes() {
        assert_eq!(quote_ident(r#"odd"name"#), r#""odd\"name""#);
    }
}

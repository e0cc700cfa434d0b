//! Board-game review REST API: categories, reviews, comments, and users over PostgreSQL.

pub mod config;
pub mod error;
pub mod model;
pub mod response;
pub mod sql;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::{api_routes, common_routes};
pub use service::{CatalogService, CommentService, ReviewService};
pub use state::AppState;
pub use store::{ensure_database_exists, Store};

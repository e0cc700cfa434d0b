//! Data access layer: parameterized queries per resource, existence gates,
//! and pre-store request validation.

pub mod catalog;
pub mod comments;
pub mod exists;
pub mod reviews;
pub mod validation;

pub use catalog::CatalogService;
pub use comments::CommentService;
pub use exists::check_exists;
pub use reviews::ReviewService;
pub use validation::{parse_inc_votes, validate_new_comment, NewComment};

//! Review queries: filtered listing, detail with comment count, vote adjustment.

use crate::error::AppError;
use crate::model::{Review, ReviewDetail, ReviewSummary};
use crate::service::exists::check_exists;
use crate::sql::select_reviews;
use crate::store::Store;

const SELECT_REVIEW_DETAIL: &str = "\
    SELECT reviews.review_id, title, category, designer, owner, review_body, \
    review_img_url, reviews.votes, reviews.created_at, \
    CAST(COUNT(comments.comment_id) AS INT) AS comment_count \
    FROM reviews \
    LEFT JOIN comments ON reviews.review_id = comments.review_id \
    WHERE reviews.review_id = $1 \
    GROUP BY reviews.review_id";

// Single atomic increment relative to the stored value; two round-trips
// would lose updates under concurrent patches on the same review.
const UPDATE_VOTES: &str = "\
    UPDATE reviews SET votes = votes + $1 WHERE review_id = $2 \
    RETURNING review_id, title, category, designer, owner, review_body, \
    review_img_url, votes, created_at";

pub struct ReviewService;

impl ReviewService {
    /// List reviews with optional sort column, order, and category filter.
    /// Unknown sort columns and orders fall back silently; an unknown
    /// category is a client error, a known one with no reviews is not.
    pub async fn list(
        store: &Store,
        sort_by: Option<&str>,
        order: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<ReviewSummary>, AppError> {
        if let Some(slug) = category {
            let known: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE slug = $1)")
                    .bind(slug)
                    .fetch_one(store.pool())
                    .await?;
            if !known {
                return Err(AppError::BadRequest("Bad Request".into()));
            }
        }

        let q = select_reviews(sort_by, order, category);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, ReviewSummary>(&q.sql);
        for p in &q.params {
            query = query.bind(p);
        }
        Ok(query.fetch_all(store.pool()).await?)
    }

    /// Fetch one review with its aggregated comment count. Uses a message
    /// distinct from the shared existence gate on purpose.
    pub async fn by_id(store: &Store, review_id: i32) -> Result<ReviewDetail, AppError> {
        sqlx::query_as::<_, ReviewDetail>(SELECT_REVIEW_DETAIL)
            .bind(review_id)
            .fetch_optional(store.pool())
            .await?
            .ok_or_else(|| AppError::NotFound("review_id not found".into()))
    }

    /// Apply a signed increment to a review's vote count and return the
    /// updated row.
    pub async fn adjust_votes(
        store: &Store,
        review_id: i32,
        inc_votes: i32,
    ) -> Result<Review, AppError> {
        check_exists(store, "reviews", "review_id", review_id).await?;
        sqlx::query_as::<_, Review>(UPDATE_VOTES)
            .bind(inc_votes)
            .bind(review_id)
            .fetch_optional(store.pool())
            .await?
            .ok_or_else(|| AppError::NotFound("Resource not found".into()))
    }
}

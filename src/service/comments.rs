//! Comment queries: per-review listing, creation behind existence gates,
//! deletion.

use crate::error::AppError;
use crate::model::Comment;
use crate::service::exists::check_exists;
use crate::service::validation::NewComment;
use crate::store::Store;

const COMMENT_COLUMNS: &str = "comment_id, votes, created_at, author, body, review_id";

pub struct CommentService;

impl CommentService {
    /// Comments for a review, newest first. The review itself must exist;
    /// a review with no comments yields an empty list.
    pub async fn for_review(store: &Store, review_id: i32) -> Result<Vec<Comment>, AppError> {
        check_exists(store, "reviews", "review_id", review_id).await?;
        let sql = format!(
            "SELECT {} FROM comments WHERE review_id = $1 ORDER BY created_at DESC",
            COMMENT_COLUMNS
        );
        Ok(sqlx::query_as::<_, Comment>(&sql)
            .bind(review_id)
            .fetch_all(store.pool())
            .await?)
    }

    /// Insert a comment after confirming both referenced rows exist, so the
    /// client sees NOT_FOUND rather than a constraint violation.
    pub async fn create(
        store: &Store,
        review_id: i32,
        comment: &NewComment,
    ) -> Result<Comment, AppError> {
        check_exists(store, "reviews", "review_id", review_id).await?;
        check_exists(store, "users", "username", comment.username.clone()).await?;
        let sql = format!(
            "INSERT INTO comments (review_id, author, body) VALUES ($1, $2, $3) RETURNING {}",
            COMMENT_COLUMNS
        );
        Ok(sqlx::query_as::<_, Comment>(&sql)
            .bind(review_id)
            .bind(&comment.username)
            .bind(&comment.body)
            .fetch_one(store.pool())
            .await?)
    }

    /// Delete by id; deleting an absent comment is a not-found, with the
    /// per-endpoint message the interface pins.
    pub async fn delete(store: &Store, comment_id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id)
            .execute(store.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("comment_id not found".into()));
        }
        Ok(())
    }
}

//! Comment listing, creation, and deletion handlers.

use crate::error::AppError;
use crate::handlers::parse_id;
use crate::response::{CommentBody, CommentsBody};
use crate::service::{validate_new_comment, CommentService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

/// Fields are optional so an incomplete payload surfaces as the domain's
/// "Incomplete comment" error rather than a framework rejection.
#[derive(Deserialize)]
pub struct CommentPayload {
    username: Option<String>,
    body: Option<String>,
}

pub async fn for_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<Json<CommentsBody>, AppError> {
    let review_id = parse_id(&review_id)?;
    let comments = CommentService::for_review(&state.store, review_id).await?;
    Ok(Json(CommentsBody { comments }))
}

pub async fn create(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    Json(payload): Json<CommentPayload>,
) -> Result<(StatusCode, Json<CommentBody>), AppError> {
    let review_id = parse_id(&review_id)?;
    let new_comment =
        validate_new_comment(payload.username.as_deref(), payload.body.as_deref())?;
    let comment = CommentService::create(&state.store, review_id, &new_comment).await?;
    Ok((StatusCode::CREATED, Json(CommentBody { comment })))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let comment_id = parse_id(&comment_id)?;
    CommentService::delete(&state.store, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

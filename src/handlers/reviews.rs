//! Review listing, detail, and vote-adjustment handlers.

use crate::error::AppError;
use crate::handlers::parse_id;
use crate::response::{ReviewBody, ReviewsBody, UpdatedReviewBody};
use crate::service::{parse_inc_votes, ReviewService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub struct ListParams {
    sort_by: Option<String>,
    order: Option<String>,
    category: Option<String>,
}

#[derive(Deserialize)]
pub struct VotePatch {
    inc_votes: Option<Value>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ReviewsBody>, AppError> {
    let reviews = ReviewService::list(
        &state.store,
        params.sort_by.as_deref(),
        params.order.as_deref(),
        params.category.as_deref(),
    )
    .await?;
    Ok(Json(ReviewsBody { reviews }))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<Json<ReviewBody>, AppError> {
    let review_id = parse_id(&review_id)?;
    let review = ReviewService::by_id(&state.store, review_id).await?;
    Ok(Json(ReviewBody { review }))
}

pub async fn patch_votes(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    Json(patch): Json<VotePatch>,
) -> Result<Json<UpdatedReviewBody>, AppError> {
    let review_id = parse_id(&review_id)?;
    let inc_votes = parse_inc_votes(patch.inc_votes.as_ref())?;
    let review = ReviewService::adjust_votes(&state.store, review_id, inc_votes).await?;
    Ok(Json(UpdatedReviewBody { review }))
}

//! Route tables: the /api surface plus operational endpoints.

use crate::handlers::{api, catalog, comments, reviews};
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;

/// The nine /api endpoints.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api", get(api::manifest))
        .route("/api/categories", get(catalog::categories))
        .route("/api/reviews", get(reviews::list))
        .route(
            "/api/reviews/:review_id",
            get(reviews::detail).patch(reviews::patch_votes),
        )
        .route(
            "/api/reviews/:review_id/comments",
            get(comments::for_review).post(comments::create),
        )
        .route("/api/comments/:comment_id", delete(comments::remove))
        .route("/api/users", get(catalog::users))
        .with_state(state)
}

#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

async fn health() -> Json<StatusBody> {
    Json(StatusBody {
        status: "ok",
        database: None,
    })
}

async fn ready(
    State(state): State<AppState>,
) -> Result<Json<StatusBody>, (axum::http::StatusCode, Json<StatusBody>)> {
    if !state.store.ping().await {
        return Err((
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(StatusBody {
                status: "degraded",
                database: Some("unavailable"),
            }),
        ));
    }
    Ok(Json(StatusBody {
        status: "ok",
        database: Some("ok"),
    }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Operational routes outside /api: GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}

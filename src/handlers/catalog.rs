//! Category and user listing handlers.

use crate::error::AppError;
use crate::response::{CategoriesBody, UsersBody};
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesBody>, AppError> {
    let categories = CatalogService::categories(&state.store).await?;
    Ok(Json(CategoriesBody { categories }))
}

pub async fn users(State(state): State<AppState>) -> Result<Json<UsersBody>, AppError> {
    let users = CatalogService::users(&state.store).await?;
    Ok(Json(UsersBody { users }))
}

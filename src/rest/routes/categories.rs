// rest/routes/categories.rs — Category REST routes.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::rest::error::ApiError;
use crate::store::categories::{Category, CategoryCreate};
use crate::AppContext;

pub async fn create_category(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<CategoryCreate>,
) -> Result<Json<Category>, ApiError> {
    // Ownership is stamped from the first user, never taken from the caller.
    let owner = ctx
        .store
        .users
        .current_id()
        .await
        .ok_or(ApiError::BadRequest("a user must be created first"))?;
    Ok(Json(ctx.store.categories.create(body, owner).await))
}

pub async fn list_categories(State(ctx): State<Arc<AppContext>>) -> Json<Vec<Category>> {
    Json(ctx.store.categories.list().await)
}

pub async fn update_category(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
    Json(body): Json<CategoryCreate>,
) -> Result<Json<Category>, ApiError> {
    ctx.store
        .categories
        .update(id, body)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("category not found"))
}

/// Succeeds whether or not the id exists.
pub async fn delete_category(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
) -> Json<Value> {
    ctx.store.categories.delete(id).await;
    Json(json!({ "message": "category deleted" }))
}

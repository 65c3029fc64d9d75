// rest/routes/users.rs — Current-user REST routes.
//
// There is no authentication: /users/me always addresses the first
// registered user.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::rest::error::ApiError;
use crate::store::users::{User, UserCreate};
use crate::AppContext;

pub async fn create_user(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<UserCreate>,
) -> Json<User> {
    Json(ctx.store.users.create(body).await)
}

pub async fn get_current_user(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<User>, ApiError> {
    match ctx.store.users.current().await {
        Some(user) => Ok(Json(user)),
        None => Err(ApiError::NotFound("no users registered")),
    }
}

pub async fn update_current_user(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<UserCreate>,
) -> Result<Json<User>, ApiError> {
    ctx.store
        .users
        .update_current(body)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("no users registered"))
}

/// Clears the whole user store, not just the current user.
pub async fn delete_current_user(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Value>, ApiError> {
    if ctx.store.users.clear().await {
        Ok(Json(json!({ "message": "account deleted" })))
    } else {
        Err(ApiError::NotFound("no users registered"))
    }
}

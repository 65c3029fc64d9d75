// rest/routes/tasks.rs — Task REST routes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::rest::error::ApiError;
use crate::store::tasks::{Task, TaskCreate, TaskListParams, TaskStatus};
use crate::AppContext;

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<TaskCreate>,
) -> Result<Json<Task>, ApiError> {
    if ctx.store.users.count().await == 0 {
        return Err(ApiError::BadRequest("a user must be created first"));
    }
    // category_id and user_id are taken verbatim — dangling references are
    // allowed (see DESIGN.md).
    Ok(Json(ctx.store.tasks.create(body).await))
}

pub async fn list_tasks(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<TaskListParams>,
) -> Json<Vec<Task>> {
    Json(ctx.store.tasks.list(params).await)
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, ApiError> {
    match ctx.store.tasks.get(id).await {
        Some(task) => Ok(Json(task)),
        None => Err(ApiError::NotFound("task not found")),
    }
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
    Json(body): Json<TaskCreate>,
) -> Result<Json<Task>, ApiError> {
    ctx.store
        .tasks
        .update(id, body)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("task not found"))
}

/// Succeeds whether or not the id exists.
pub async fn delete_task(State(ctx): State<Arc<AppContext>>, Path(id): Path<u64>) -> Json<Value> {
    ctx.store.tasks.delete(id).await;
    Json(json!({ "message": "task deleted" }))
}

#[derive(Deserialize)]
pub struct StatusParam {
    pub status: String,
}

/// The status string is validated before the task lookup, so an unknown
/// value yields 422 even for a missing id.
pub async fn change_status(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
    Query(param): Query<StatusParam>,
) -> Result<Json<Task>, ApiError> {
    let status: TaskStatus = param
        .status
        .parse()
        .map_err(|e: crate::store::tasks::UnknownStatus| ApiError::Validation(e.to_string()))?;
    ctx.store
        .tasks
        .set_status(id, status)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("task not found"))
}

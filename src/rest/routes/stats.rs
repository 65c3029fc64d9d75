// rest/routes/stats.rs — Read-only aggregation routes over the task store.

use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::store::tasks::{ProductivityReport, TaskSummary};
use crate::AppContext;

pub async fn stats_summary(State(ctx): State<Arc<AppContext>>) -> Json<TaskSummary> {
    let today = Utc::now().date_naive();
    Json(ctx.store.tasks.summary(today).await)
}

pub async fn stats_productivity(State(ctx): State<Arc<AppContext>>) -> Json<ProductivityReport> {
    Json(ctx.store.tasks.productivity().await)
}

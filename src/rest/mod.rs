// rest/mod.rs — Public REST API server.
//
// Axum HTTP server exposing the task-management surface over plain JSON.
//
// Endpoints:
//   POST   /users
//   GET    /users/me
//   PUT    /users/me
//   DELETE /users/me
//   POST   /categories
//   GET    /categories
//   PUT    /categories/{id}
//   DELETE /categories/{id}
//   POST   /tasks
//   GET    /tasks?status=&priority=
//   GET    /tasks/{id}
//   PUT    /tasks/{id}
//   DELETE /tasks/{id}
//   PATCH  /tasks/{id}/status?status=
//   GET    /stats/summary
//   GET    /stats/productivity
//   GET    /health

pub mod error;
pub mod routes;

use anyhow::Result;
use axum::{
    routing::{get, patch, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("REST API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        // Health
        .route("/health", get(routes::health::health))
        // Users — /users/me always addresses the first registered user
        .route("/users", post(routes::users::create_user))
        .route(
            "/users/me",
            get(routes::users::get_current_user)
                .put(routes::users::update_current_user)
                .delete(routes::users::delete_current_user),
        )
        // Categories
        .route(
            "/categories",
            get(routes::categories::list_categories).post(routes::categories::create_category),
        )
        .route(
            "/categories/{id}",
            put(routes::categories::update_category).delete(routes::categories::delete_category),
        )
        // Tasks
        .route(
            "/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/tasks/{id}",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        )
        .route("/tasks/{id}/status", patch(routes::tasks::change_status))
        // Stats
        .route("/stats/summary", get(routes::stats::stats_summary))
        .route(
            "/stats/productivity",
            get(routes::stats::stats_productivity),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

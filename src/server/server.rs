use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use serde_json::json;
use tracing::info;

use crate::blog::Blog;
use crate::config::settings::Settings;
use crate::errors::BlogError;
use crate::helpers::time::now_rfc3339;
use crate::observability::metrics::get_metrics;
use crate::observability::routes::MetricsState;
use crate::records::display::DisplayRecord;

#[derive(Clone)]
pub struct AppState {
    pub blog: Arc<Blog>,
    pub metrics_state: MetricsState,
}

/// Start the Axum server: blog routes, health check, and the metrics
/// endpoint when enabled.
pub async fn start(settings: &Settings, blog: Arc<Blog>) -> Result<()> {
    let metrics = get_metrics().await;
    let state = AppState {
        blog,
        metrics_state: MetricsState::new(metrics.registry.clone()),
    };

    let app = Router::new()
        .route("/", get(index))
        .route("/article/{id}", get(article_detail))
        .route("/api/health", get(health))
        .merge(state.metrics_state.router(&settings.metrics))
        .with_state(state);

    let bind_addr = format!("{}:{}", settings.server.host, settings.server.port);
    info!("listening on {bind_addr}");
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    metrics.up.set(1);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Index: the full record list with previews.
async fn index(State(state): State<AppState>) -> Json<Vec<DisplayRecord>> {
    state.blog.sweep_expired().await;
    Json(state.blog.list_records().await)
}

/// Article detail; 404 when the id is not in the current record set.
async fn article_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    state.blog.sweep_expired().await;
    match state.blog.get_record(&id).await {
        Ok(article) => Json(article).into_response(),
        Err(BlogError::RecordNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "article not found" })),
        )
            .into_response(),
    }
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.blog.sweep_expired().await;
    let stats = state.blog.cache_stats().await;
    Json(json!({
        "status": "healthy",
        "timestamp": now_rfc3339(),
        "cache_size": stats.entries,
    }))
}

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use moments_core::{BookingRequest, MetricsSnapshot};
use serde::Serialize;
use tracing::debug;

use crate::{error::AppError, middleware::admin_auth_middleware, state::AppState};

#[derive(Debug, Serialize)]
pub struct RequestListResponse {
    pub requests: Vec<BookingRequest>,
}

/// Admin read endpoints. All of them sit behind the admin password.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/requests", get(list_requests))
        .route("/admin/requests/metrics", get(request_metrics))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            admin_auth_middleware,
        ))
}

/// GET /admin/requests
async fn list_requests(
    State(state): State<AppState>,
) -> Result<Json<RequestListResponse>, AppError> {
    let requests = state
        .requests
        .list_all()
        .await
        .map_err(|e| AppError::internal("Failed to fetch requests", e))?;

    debug!("Listing {} booking requests", requests.len());
    Ok(Json(RequestListResponse { requests }))
}

/// GET /admin/requests/metrics
async fn request_metrics(
    State(state): State<AppState>,
) -> Result<Json<MetricsSnapshot>, AppError> {
    let rows = state
        .requests
        .list_activity()
        .await
        .map_err(|e| AppError::internal("Failed to fetch requests data", e))?;

    let snapshot = MetricsSnapshot::compute(&rows);
    debug!(
        "Computed metrics: total={} most_requested={:?}",
        snapshot.total_requests, snapshot.most_requested_moment
    );

    Ok(Json(snapshot))
}

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use moments_catalog::Moment;
use serde::Serialize;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Serialize)]
pub struct MomentListResponse {
    pub moments: Vec<Moment>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/moments", get(list_moments))
        .route("/moments/{id}", get(get_moment))
}

/// GET /moments
async fn list_moments(State(state): State<AppState>) -> Json<MomentListResponse> {
    Json(MomentListResponse {
        moments: state.catalog.all().to_vec(),
    })
}

/// GET /moments/{id}
async fn get_moment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Moment>, AppError> {
    state
        .catalog
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError("Moment not found".to_string()))
}

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use moments_core::CoreError;

use crate::{error::AppError, state::AppState};

/// Header carrying the admin credential.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

// ============================================================================
// Admin Authentication Middleware
// ============================================================================

/// Guards every admin route with the shared admin password.
///
/// An unset server password is reported as a configuration error (500),
/// distinct from a missing or wrong credential (401).
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = req
        .headers()
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|h| h.to_str().ok());

    if let Err(err) = state.admin.authorize(provided) {
        tracing::warn!("Admin request to {} rejected: {}", req.uri().path(), err);
        return Err(CoreError::from(err).into());
    }

    Ok(next.run(req).await)
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use moments_core::CoreError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    Unauthorized,
    /// Server is missing required configuration. The detail is logged only.
    ConfigurationError(String),
    NotFoundError(String),
    /// Storage or another backend failed; `message` is what the caller sees.
    InternalServerError { message: &'static str, cause: CoreError },
}

impl AppError {
    /// A backend failure reported to the caller as `message`.
    pub fn internal(message: &'static str, cause: CoreError) -> Self {
        AppError::InternalServerError { message, cause }
    }

    fn status_and_message(self) -> (StatusCode, String) {
        match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::ConfigurationError(detail) => {
                tracing::error!("Configuration error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error".to_string(),
                )
            }
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InternalServerError { message, cause } => {
                tracing::error!("{}: {}", message, cause);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => AppError::ValidationError(msg),
            CoreError::Unauthorized => AppError::Unauthorized,
            CoreError::Configuration(detail) => AppError::ConfigurationError(detail),
            cause @ (CoreError::Persistence(_) | CoreError::Notification(_)) => {
                AppError::internal("Internal server error", cause)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Error for the public form endpoints, rendered as
/// `{"success": false, "error": ...}`.
#[derive(Debug)]
pub struct FormError(pub AppError);

impl From<AppError> for FormError {
    fn from(err: AppError) -> Self {
        FormError(err)
    }
}

impl From<CoreError> for FormError {
    fn from(err: CoreError) -> Self {
        FormError(err.into())
    }
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.0.status_and_message();

        let body = Json(json!({
            "success": false,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moments_core::AuthError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::ValidationError("bad".into()), StatusCode::BAD_REQUEST, "bad"),
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED, "Unauthorized"),
            (
                AppError::ConfigurationError("ADMIN_PASSWORD missing".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error",
            ),
            (
                AppError::NotFoundError("Moment not found".into()),
                StatusCode::NOT_FOUND,
                "Moment not found",
            ),
            (
                AppError::internal(
                    "Failed to save request",
                    CoreError::Persistence("pool timed out".into()),
                ),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save request",
            ),
        ];

        for (err, status, message) in cases {
            assert_eq!(err.status_and_message(), (status, message.to_string()));
        }
    }

    #[test]
    fn test_core_errors_convert() {
        let cases = [
            (
                CoreError::Validation("Missing required fields".into()),
                StatusCode::BAD_REQUEST,
                "Missing required fields",
            ),
            (CoreError::from(AuthError::Unauthorized), StatusCode::UNAUTHORIZED, "Unauthorized"),
            (
                CoreError::from(AuthError::NotConfigured),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error",
            ),
            (
                CoreError::Persistence("connection reset".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ),
        ];

        for (err, status, message) in cases {
            let app_err = AppError::from(err);
            assert_eq!(app_err.status_and_message(), (status, message.to_string()));
        }
    }
}

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use moments_core::{BookingRequest, CoreError, CoreResult, EmailMessage, NewBookingRequest};
use moments_shared::Masked;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::{
    error::{AppError, FormError},
    state::AppState,
};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub moment_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateRequestResponse {
    pub success: bool,
    pub data: BookingRequest,
}

impl CreateRequestBody {
    /// Every field must be present and non-empty.
    pub fn validate(self) -> CoreResult<NewBookingRequest> {
        fn present(field: Option<String>) -> Option<String> {
            field.filter(|v| !v.is_empty())
        }

        match (present(self.name), present(self.email), present(self.moment_id)) {
            (Some(name), Some(email), Some(moment_id)) => {
                Ok(NewBookingRequest::new(name, email, moment_id))
            }
            (name, email, moment_id) => {
                let missing: Vec<&str> = [
                    ("name", name.is_none()),
                    ("email", email.is_none()),
                    ("momentId", moment_id.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, is_missing)| is_missing.then_some(field))
                .collect();
                warn!("Rejected booking request, missing fields: {}", missing.join(", "));
                Err(CoreError::Validation("Missing required fields".to_string()))
            }
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/requests", post(create_request))
}

/// POST /requests
async fn create_request(
    State(state): State<AppState>,
    payload: Result<Json<CreateRequestBody>, JsonRejection>,
) -> Result<Json<CreateRequestResponse>, FormError> {
    let Json(body) = payload.map_err(|rejection| {
        debug!("Unreadable booking request body: {}", rejection);
        AppError::ValidationError("Invalid request".to_string())
    })?;

    let new_request = body.validate()?;

    let created = state
        .requests
        .insert(new_request)
        .await
        .map_err(|e| AppError::internal("Failed to save request", e))?;

    info!(
        "Moment request received and saved: id={} moment={} name={} email={}",
        created.id,
        created.moment_id.as_deref().unwrap_or_default(),
        Masked(&created.name),
        Masked(&created.email)
    );

    notify_operator(&state, &created).await;

    Ok(Json(CreateRequestResponse {
        success: true,
        data: created,
    }))
}

/// Best-effort: a failed email never fails the booking.
async fn notify_operator(state: &AppState, created: &BookingRequest) {
    let Some(recipient) = state.notification.recipient.as_deref() else {
        return;
    };

    let message =
        EmailMessage::booking_received(&state.notification.from, recipient, created, Utc::now());
    match state.notifier.send(&message).await {
        Ok(()) => info!("Email notification sent for request {}", created.id),
        Err(e) => error!("Error sending email for request {}: {}", created.id, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(name: Option<&str>, email: Option<&str>, moment_id: Option<&str>) -> CreateRequestBody {
        CreateRequestBody {
            name: name.map(String::from),
            email: email.map(String::from),
            moment_id: moment_id.map(String::from),
        }
    }

    #[test]
    fn test_valid_body() {
        let req = body(Some("Ada"), Some("ada@example.com"), Some("1")).validate().unwrap();
        assert_eq!(req.name, "Ada");
        assert_eq!(req.email, "ada@example.com");
        assert_eq!(req.moment_id, "1");
    }

    #[test]
    fn test_missing_or_empty_fields_rejected() {
        let cases = [
            body(None, Some("ada@example.com"), Some("1")),
            body(Some("Ada"), None, Some("1")),
            body(Some("Ada"), Some("ada@example.com"), None),
            body(Some(""), Some("ada@example.com"), Some("1")),
            body(Some("Ada"), Some("ada@example.com"), Some("")),
            body(None, None, None),
        ];

        for case in cases {
            match case.validate() {
                Err(CoreError::Validation(msg)) => assert_eq!(msg, "Missing required fields"),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_body_uses_camel_case() {
        let raw = r#"{"name":"Ada","email":"ada@example.com","momentId":"3"}"#;
        let parsed: CreateRequestBody = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.moment_id.as_deref(), Some("3"));
    }
}

use axum::{
    extract::rejection::JsonRejection,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use moments_shared::Masked;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::{
    error::{AppError, FormError},
    state::AppState,
};

/// Host onboarding form. Submissions are logged, not stored, so fields are
/// taken as whatever JSON the form sent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostApplication {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub city: Option<Value>,
    pub asset_type: Option<Value>,
    pub description: Option<Value>,
}

impl HostApplication {
    /// Log line with the personal fields masked.
    fn summary(&self) -> String {
        format!(
            "name={} email={} city={} assetType={} description={}",
            masked(&self.name),
            masked(&self.email),
            plain(&self.city),
            plain(&self.asset_type),
            plain(&self.description),
        )
    }
}

fn masked(field: &Option<Value>) -> String {
    match field {
        Some(Value::String(s)) => Masked(s).to_string(),
        Some(_) => "********".to_string(),
        None => "-".to_string(),
    }
}

fn plain(field: &Option<Value>) -> String {
    match field {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "-".to_string(),
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/host", post(submit_host_application))
}

/// POST /host
async fn submit_host_application(
    payload: Result<Json<HostApplication>, JsonRejection>,
) -> Result<Json<Value>, FormError> {
    let Json(application) = payload.map_err(|rejection| {
        debug!("Unreadable host application body: {}", rejection);
        AppError::ValidationError("Invalid request".to_string())
    })?;

    info!(
        "Host onboarding submission received at {}: {}",
        Utc::now().to_rfc3339(),
        application.summary()
    );

    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_non_string_fields() {
        let raw = r#"{"name":"Lee","email":"lee@example.com","description":42,"city":null}"#;
        let application: HostApplication = serde_json::from_str(raw).unwrap();

        assert_eq!(application.description, Some(json!(42)));
        assert!(application.city.is_none());
    }

    #[test]
    fn test_summary_masks_personal_fields() {
        let application = HostApplication {
            name: Some(json!("Lee")),
            email: Some(json!("lee@example.com")),
            city: Some(json!("Tokyo")),
            asset_type: None,
            description: Some(json!(42)),
        };

        let summary = application.summary();
        assert!(summary.contains("name=L***"));
        assert!(summary.contains("email=l***@example.com"));
        assert!(summary.contains("city=Tokyo"));
        assert!(summary.contains("assetType=-"));
        assert!(summary.contains("description=42"));
        assert!(!summary.contains("Lee"));
        assert!(!summary.contains("lee@"));
    }
}

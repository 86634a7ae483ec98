use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted record of a visitor's interest in a moment.
///
/// `moment_id` is matched against the catalog by string only; nothing
/// enforces that the moment exists. It is `None` only for rows written
/// outside this service with a NULL column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub moment_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload. The id is assigned by storage, the timestamp by the
/// intake handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookingRequest {
    pub name: String,
    pub email: String,
    pub moment_id: String,
    pub created_at: DateTime<Utc>,
}

impl NewBookingRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        moment_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            moment_id: moment_id.into(),
            created_at: Utc::now(),
        }
    }

    pub fn into_request(self, id: Uuid) -> BookingRequest {
        BookingRequest {
            id,
            name: self.name,
            email: self.email,
            moment_id: Some(self.moment_id),
            created_at: self.created_at,
        }
    }
}

/// The `(moment_id, created_at)` projection read for metrics. Both columns
/// are nullable at the storage level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestActivity {
    pub moment_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&BookingRequest> for RequestActivity {
    fn from(req: &BookingRequest) -> Self {
        Self {
            moment_id: req.moment_id.clone(),
            created_at: Some(req.created_at),
        }
    }
}

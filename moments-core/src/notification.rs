use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::booking::BookingRequest;
use crate::CoreResult;

pub const BOOKING_SUBJECT: &str = "New Moment Booking Request";

/// A transactional email, shaped like the provider's send payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

impl EmailMessage {
    /// Operator notification for a freshly stored booking request.
    pub fn booking_received(
        from: &str,
        to: &str,
        request: &BookingRequest,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        let html = format!(
            "<h2>{subject}</h2>\n\
             <p><strong>Name:</strong> {name}</p>\n\
             <p><strong>Email:</strong> {email}</p>\n\
             <p><strong>Moment ID:</strong> {moment}</p>\n\
             <p><strong>Request ID:</strong> {id}</p>\n\
             <p><strong>Submitted at:</strong> {at}</p>\n",
            subject = BOOKING_SUBJECT,
            name = escape_html(&request.name),
            email = escape_html(&request.email),
            moment = escape_html(request.moment_id.as_deref().unwrap_or_default()),
            id = request.id,
            at = submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        );

        Self {
            from: from.to_string(),
            to: to.to_string(),
            subject: BOOKING_SUBJECT.to_string(),
            html,
        }
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Outbound email channel. Delivery is best-effort; callers decide what a
/// failure means.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> CoreResult<()>;
}

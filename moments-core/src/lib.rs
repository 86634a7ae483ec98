pub mod admin;
pub mod booking;
pub mod metrics;
pub mod notification;
pub mod repository;

pub use admin::{AdminGate, AuthError};
pub use booking::{BookingRequest, NewBookingRequest, RequestActivity};
pub use metrics::MetricsSnapshot;
pub use notification::{EmailMessage, Notifier};
pub use repository::RequestRepository;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Persistence failed: {0}")]
    Persistence(String),
    #[error("Notification failed: {0}")]
    Notification(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

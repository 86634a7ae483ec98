use std::sync::Arc;
use moments_catalog::Catalog;
use moments_core::{AdminGate, Notifier, RequestRepository};

#[derive(Clone)]
pub struct NotificationSettings {
    /// Operator address for booking emails; `None` skips notification.
    pub recipient: Option<String>,
    pub from: String,
}

#[derive(Clone)]
pub struct AppState {
    pub requests: Arc<dyn RequestRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub notification: NotificationSettings,
    pub admin: AdminGate,
    pub catalog: Arc<Catalog>,
}

use async_trait::async_trait;

use crate::booking::{BookingRequest, NewBookingRequest, RequestActivity};
use crate::CoreResult;

/// Storage for booking requests. Rows are only ever inserted and read.
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Persists a request and returns it with its storage-assigned id.
    async fn insert(&self, request: NewBookingRequest) -> CoreResult<BookingRequest>;

    /// All requests, newest first.
    async fn list_all(&self) -> CoreResult<Vec<BookingRequest>>;

    /// `(moment_id, created_at)` of every request, newest first.
    async fn list_activity(&self) -> CoreResult<Vec<RequestActivity>>;
}

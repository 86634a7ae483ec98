use async_trait::async_trait;
use moments_core::{
    BookingRequest, CoreResult, NewBookingRequest, RequestActivity, RequestRepository,
};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local storage, used when no database is configured and in tests.
#[derive(Default)]
pub struct InMemoryRequestRepository {
    rows: RwLock<Vec<BookingRequest>>,
}

impl InMemoryRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Newest first; equal timestamps keep the later insert first.
    async fn newest_first(&self) -> Vec<BookingRequest> {
        let mut rows: Vec<BookingRequest> = self.rows.read().await.iter().rev().cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }
}

#[async_trait]
impl RequestRepository for InMemoryRequestRepository {
    async fn insert(&self, request: NewBookingRequest) -> CoreResult<BookingRequest> {
        let stored = request.into_request(Uuid::new_v4());
        self.rows.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> CoreResult<Vec<BookingRequest>> {
        Ok(self.newest_first().await)
    }

    async fn list_activity(&self) -> CoreResult<Vec<RequestActivity>> {
        Ok(self.newest_first().await.iter().map(RequestActivity::from).collect())
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moments_core::{
    BookingRequest, CoreError, CoreResult, NewBookingRequest, RequestActivity, RequestRepository,
};
use sqlx::PgPool;
use uuid::Uuid;

/// `requests` table in Postgres.
pub struct PgRequestRepository {
    pool: PgPool,
}

impl PgRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RequestRow {
    id: Uuid,
    name: String,
    email: String,
    moment_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<RequestRow> for BookingRequest {
    fn from(row: RequestRow) -> Self {
        BookingRequest {
            id: row.id,
            name: row.name,
            email: row.email,
            moment_id: row.moment_id,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ActivityRow {
    moment_id: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

fn persistence(err: sqlx::Error) -> CoreError {
    CoreError::Persistence(err.to_string())
}

#[async_trait]
impl RequestRepository for PgRequestRepository {
    async fn insert(&self, request: NewBookingRequest) -> CoreResult<BookingRequest> {
        let row = sqlx::query_as::<_, RequestRow>(
            r#"
            INSERT INTO requests (name, email, moment_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, moment_id, created_at
            "#,
        )
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.moment_id)
        .bind(request.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(persistence)?;

        Ok(row.into())
    }

    async fn list_all(&self) -> CoreResult<Vec<BookingRequest>> {
        let rows = sqlx::query_as::<_, RequestRow>(
            "SELECT id, name, email, moment_id, created_at FROM requests ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(persistence)?;

        Ok(rows.into_iter().map(BookingRequest::from).collect())
    }

    async fn list_activity(&self) -> CoreResult<Vec<RequestActivity>> {
        let rows = sqlx::query_as::<_, ActivityRow>(
            "SELECT moment_id, created_at FROM requests ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(persistence)?;

        Ok(rows
            .into_iter()
            .map(|row| RequestActivity {
                moment_id: row.moment_id,
                created_at: row.created_at,
            })
            .collect())
    }
}

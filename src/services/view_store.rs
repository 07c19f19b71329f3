//! Persistence port for view events, plus the Postgres adapter used in production.

use async_trait::async_trait;
use thiserror::Error;

use crate::database::DatabasePool;
use crate::models::ViewEvent;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("view store unavailable: {message}")]
    Unavailable { message: String },

    #[error("view store query failed: {0}")]
    Query(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let unavailable = matches!(
            err,
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
        );
        if unavailable {
            StoreError::Unavailable { message: err.to_string() }
        } else {
            StoreError::Query(err)
        }
    }
}

/// Append-only storage for view events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViewStore: Send + Sync {
    /// Persist one event. Never merges with existing rows.
    async fn record(&self, event: &ViewEvent) -> Result<(), StoreError>;

    /// Every stored event, most recent `viewed_at` first.
    async fn list_newest_first(&self) -> Result<Vec<ViewEvent>, StoreError>;
}

#[derive(Clone)]
pub struct PgViewStore {
    pool: DatabasePool,
}

impl PgViewStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ViewStore for PgViewStore {
    async fn record(&self, event: &ViewEvent) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO view_events (pixel_id, viewed_at, ip, user_agent)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&event.pixel_id)
        .bind(event.viewed_at)
        .bind(&event.ip)
        .bind(&event.user_agent)
        .execute(&*self.pool)
        .await?;

        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<ViewEvent>, StoreError> {
        let events = sqlx::query_as::<_, ViewEvent>(
            r#"
            SELECT pixel_id, viewed_at, ip, user_agent
            FROM view_events
            ORDER BY viewed_at DESC, id DESC
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(events)
    }
}

use sqlx::{PgPool, Row};
use async_trait::async_trait;
use crate::shared::database::store::SubscriptionStore;
use crate::shared::errors::StoreError;

/// Subscription Repository
/// 구독 관계 (subscriber_id, author_id)
pub struct SubscriptionRepository {
    pool: PgPool,
}

impl SubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionStore for SubscriptionRepository {
    async fn insert(&self, subscriber_id: u64, author_id: u64) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO subscriptions (subscriber_id, author_id, created_at)
            VALUES ($1, $2, NOW())
            "#,
        )
        .bind(subscriber_id as i64)
        .bind(author_id as i64)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove(&self, subscriber_id: u64, author_id: u64) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "DELETE FROM subscriptions WHERE subscriber_id = $1 AND author_id = $2",
        )
        .bind(subscriber_id as i64)
        .bind(author_id as i64)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_authors(&self, subscriber_id: u64) -> Result<Vec<u64>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT author_id
            FROM subscriptions
            WHERE subscriber_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(subscriber_id as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| row.get::<i64, _>("author_id") as u64)
            .collect())
    }

    async fn count_subscribers(&self, author_id: u64) -> Result<u64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM subscriptions WHERE author_id = $1")
            .bind(author_id as i64)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get::<i64, _>("count") as u64)
    }
}

use sqlx::{PgPool, Row};
use async_trait::async_trait;
use crate::shared::database::store::ViewStore;
use crate::shared::errors::StoreError;

/// View Repository
/// 시청 기록 (video_id, user_id)
pub struct ViewRepository {
    pool: PgPool,
}

impl ViewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ViewStore for ViewRepository {
    async fn insert(&self, video_id: u64, user_id: u64) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO views (video_id, user_id, watched_at)
            VALUES ($1, $2, NOW())
            "#,
        )
        .bind(video_id as i64)
        .bind(user_id as i64)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn count_for_video(&self, video_id: u64) -> Result<u64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM views WHERE video_id = $1")
            .bind(video_id as i64)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get::<i64, _>("count") as u64)
    }

    async fn list_by_user(&self, user_id: u64) -> Result<Vec<u64>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT video_id
            FROM views
            WHERE user_id = $1
            ORDER BY watched_at DESC
            "#,
        )
        .bind(user_id as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| row.get::<i64, _>("video_id") as u64)
            .collect())
    }
}

use sqlx::{postgres::PgRow, PgPool, Row};
use async_trait::async_trait;
use crate::domains::videos::models::video::{Video, NewVideo};
use crate::shared::database::store::VideoStore;
use crate::shared::errors::StoreError;

/// Video Repository
/// 동영상 메타데이터 데이터베이스 작업 처리
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &PgRow) -> Video {
        Video {
            id: row.get::<i64, _>("id") as u64,
            video_name: row.get("video_name"),
            description: row.get("description"),
            author_id: row.get::<i64, _>("author_id") as u64,
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl VideoStore for VideoRepository {
    async fn get_by_id(&self, id: u64) -> Result<Option<Video>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, video_name, description, author_id, created_at
            FROM videos
            WHERE id = $1
            "#,
        )
        .bind(id as i64)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(Self::map_row))
    }

    async fn create(&self, video: NewVideo) -> Result<Video, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO videos (video_name, description, author_id, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, video_name, description, author_id, created_at
            "#,
        )
        .bind(&video.video_name)
        .bind(&video.description)
        .bind(video.author_id as i64)
        .fetch_one(&self.pool)
        .await?;

        Ok(Self::map_row(&row))
    }

    async fn list_all(&self) -> Result<Vec<Video>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, video_name, description, author_id, created_at
            FROM videos
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::map_row).collect())
    }

    async fn list_by_author(&self, author_id: u64) -> Result<Vec<Video>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, video_name, description, author_id, created_at
            FROM videos
            WHERE author_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(author_id as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::map_row).collect())
    }

    async fn delete(&self, id: u64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id as i64)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

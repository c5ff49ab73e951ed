use sqlx::{postgres::PgRow, PgPool, Row};
use async_trait::async_trait;
use crate::domains::social::models::{Comment, NewComment};
use crate::shared::database::store::CommentStore;
use crate::shared::errors::StoreError;

pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &PgRow) -> Comment {
        Comment {
            id: row.get::<i64, _>("id") as u64,
            video_id: row.get::<i64, _>("video_id") as u64,
            author_id: row.get::<i64, _>("author_id") as u64,
            text: row.get("text"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl CommentStore for CommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO comments (video_id, author_id, text, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, video_id, author_id, text, created_at
            "#,
        )
        .bind(comment.video_id as i64)
        .bind(comment.author_id as i64)
        .bind(&comment.text)
        .fetch_one(&self.pool)
        .await?;

        Ok(Self::map_row(&row))
    }

    async fn list_by_video(&self, video_id: u64) -> Result<Vec<Comment>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, video_id, author_id, text, created_at
            FROM comments
            WHERE video_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(video_id as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::map_row).collect())
    }
}

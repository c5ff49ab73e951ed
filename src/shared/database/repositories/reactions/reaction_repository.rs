use sqlx::{PgPool, Row};
use async_trait::async_trait;
use crate::domains::reactions::models::reaction::{ReactionState, LikeCounts};
use crate::shared::database::store::ReactionStore;
use crate::shared::errors::StoreError;

/// Reaction Repository
/// 좋아요/싫어요 데이터베이스 작업 처리
pub struct ReactionRepository {
    pool: PgPool,
}

impl ReactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionStore for ReactionRepository {
    /// 반응 저장 (없으면 생성, 있으면 두 플래그 덮어쓰기)
    /// Create the row or overwrite both flags in one statement
    async fn upsert(&self, state: &ReactionState) -> Result<ReactionState, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO reactions (video_id, user_id, is_like, is_dislike, updated_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (video_id, user_id)
            DO UPDATE SET is_like = EXCLUDED.is_like,
                          is_dislike = EXCLUDED.is_dislike,
                          updated_at = NOW()
            RETURNING video_id, user_id, is_like, is_dislike
            "#,
        )
        .bind(state.video_id as i64)
        .bind(state.user_id as i64)
        .bind(state.is_like)
        .bind(state.is_dislike)
        .fetch_one(&self.pool)
        .await?;

        Ok(ReactionState {
            video_id: row.get::<i64, _>("video_id") as u64,
            user_id: row.get::<i64, _>("user_id") as u64,
            is_like: row.get("is_like"),
            is_dislike: row.get("is_dislike"),
        })
    }

    async fn find(&self, video_id: u64, user_id: u64) -> Result<Option<ReactionState>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT video_id, user_id, is_like, is_dislike
            FROM reactions
            WHERE video_id = $1 AND user_id = $2
            "#,
        )
        .bind(video_id as i64)
        .bind(user_id as i64)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| ReactionState {
            video_id: row.get::<i64, _>("video_id") as u64,
            user_id: row.get::<i64, _>("user_id") as u64,
            is_like: row.get("is_like"),
            is_dislike: row.get("is_dislike"),
        }))
    }

    async fn count_for_video(&self, video_id: u64) -> Result<LikeCounts, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE is_like) AS likes,
                COUNT(*) FILTER (WHERE is_dislike) AS dislikes
            FROM reactions
            WHERE video_id = $1
            "#,
        )
        .bind(video_id as i64)
        .fetch_one(&self.pool)
        .await?;

        Ok(LikeCounts {
            likes: row.get::<i64, _>("likes") as u64,
            dislikes: row.get::<i64, _>("dislikes") as u64,
        })
    }
}

// =====================================================
// 저장소 인터페이스
// Store interfaces
// =====================================================
// 서비스 계층은 이 trait만 참조합니다.
// 구현체: PostgreSQL 리포지토리, 인메모리 저장소 (테스트/개발용)
//
// 유니크 제약은 저장소가 강제합니다:
// - users.email, users.username
// - reactions (video_id, user_id)
// - subscriptions (subscriber_id, author_id)
// - views (video_id, user_id)
// =====================================================

use std::sync::Arc;
use async_trait::async_trait;
use crate::shared::errors::StoreError;
use crate::shared::database::{
    Database, MemoryStore, UserRepository, VideoRepository, ReactionRepository,
    CommentRepository, SubscriptionRepository, ViewRepository,
};
use crate::domains::auth::models::{User, NewUser};
use crate::domains::videos::models::{Video, NewVideo};
use crate::domains::reactions::models::{ReactionState, LikeCounts};
use crate::domains::social::models::{Comment, NewComment};

/// Credential Store
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_by_id(&self, id: u64) -> Result<Option<User>, StoreError>;

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// 중복 email/username이면 `StoreError::Duplicate`
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// 저장된 refresh token 덮어쓰기 (None이면 삭제)
    /// Overwrite the stored refresh token; `None` clears it
    async fn set_refresh_token(&self, id: u64, token_hash: Option<&str>) -> Result<(), StoreError>;

    /// 저장된 값이 `expected_hash`와 같을 때만 교체 (compare-and-swap)
    /// Replace the stored token only if it still equals `expected_hash`.
    /// Returns false when the stored value differs or the user is gone.
    async fn rotate_refresh_token(
        &self,
        id: u64,
        expected_hash: &str,
        new_hash: &str,
    ) -> Result<bool, StoreError>;

    async fn delete(&self, id: u64) -> Result<bool, StoreError>;
}

/// Video Store
#[async_trait]
pub trait VideoStore: Send + Sync {
    async fn get_by_id(&self, id: u64) -> Result<Option<Video>, StoreError>;

    async fn create(&self, video: NewVideo) -> Result<Video, StoreError>;

    /// 최신순
    async fn list_all(&self) -> Result<Vec<Video>, StoreError>;

    async fn list_by_author(&self, author_id: u64) -> Result<Vec<Video>, StoreError>;

    async fn delete(&self, id: u64) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait ReactionStore: Send + Sync {
    /// (video_id, user_id) 기준 단일 upsert
    /// Single upsert keyed by (video_id, user_id); never creates a second row
    async fn upsert(&self, state: &ReactionState) -> Result<ReactionState, StoreError>;

    async fn find(&self, video_id: u64, user_id: u64) -> Result<Option<ReactionState>, StoreError>;

    async fn count_for_video(&self, video_id: u64) -> Result<LikeCounts, StoreError>;
}

#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn create(&self, comment: NewComment) -> Result<Comment, StoreError>;

    /// 오래된 순
    async fn list_by_video(&self, video_id: u64) -> Result<Vec<Comment>, StoreError>;
}

#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    /// 이미 구독 중이면 `StoreError::Duplicate`
    async fn insert(&self, subscriber_id: u64, author_id: u64) -> Result<(), StoreError>;

    /// 삭제된 행이 있으면 true
    async fn remove(&self, subscriber_id: u64, author_id: u64) -> Result<bool, StoreError>;

    async fn list_authors(&self, subscriber_id: u64) -> Result<Vec<u64>, StoreError>;

    async fn count_subscribers(&self, author_id: u64) -> Result<u64, StoreError>;
}

#[async_trait]
pub trait ViewStore: Send + Sync {
    /// 이미 시청 기록이 있으면 `StoreError::Duplicate`
    async fn insert(&self, video_id: u64, user_id: u64) -> Result<(), StoreError>;

    async fn count_for_video(&self, video_id: u64) -> Result<u64, StoreError>;

    /// 최근 시청 순
    async fn list_by_user(&self, user_id: u64) -> Result<Vec<u64>, StoreError>;
}

/// 모든 저장소 묶음
/// Bundle of every store the services depend on
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub videos: Arc<dyn VideoStore>,
    pub reactions: Arc<dyn ReactionStore>,
    pub comments: Arc<dyn CommentStore>,
    pub subscriptions: Arc<dyn SubscriptionStore>,
    pub views: Arc<dyn ViewStore>,
}

impl Stores {
    /// PostgreSQL 리포지토리로 구성
    pub fn postgres(db: &Database) -> Self {
        let pool = db.pool().clone();
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            videos: Arc::new(VideoRepository::new(pool.clone())),
            reactions: Arc::new(ReactionRepository::new(pool.clone())),
            comments: Arc::new(CommentRepository::new(pool.clone())),
            subscriptions: Arc::new(SubscriptionRepository::new(pool.clone())),
            views: Arc::new(ViewRepository::new(pool)),
        }
    }

    /// 하나의 인메모리 저장소를 모든 trait에 공유
    /// Share one in-memory store behind every trait
    pub fn memory() -> Self {
        Self::from_memory(Arc::new(MemoryStore::new()))
    }

    pub fn from_memory(store: Arc<MemoryStore>) -> Self {
        Self {
            users: store.clone(),
            videos: store.clone(),
            reactions: store.clone(),
            comments: store.clone(),
            subscriptions: store.clone(),
            views: store,
        }
    }
}

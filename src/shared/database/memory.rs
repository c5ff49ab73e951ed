// =====================================================
// 인메모리 저장소
// In-memory store
// =====================================================
// PostgreSQL 없이 동작하는 저장소 구현체입니다 (테스트, 로컬 개발용).
// 모든 테이블을 하나의 Mutex 아래에 두어 각 연산이 원자적으로 실행됩니다.
// 유니크 제약과 ON DELETE CASCADE 동작은 스키마와 동일하게 맞춥니다.
// =====================================================

use std::collections::{BTreeMap, HashMap};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use crate::shared::errors::StoreError;
use crate::shared::database::store::{
    UserStore, VideoStore, ReactionStore, CommentStore, SubscriptionStore, ViewStore,
};
use crate::domains::auth::models::{User, NewUser};
use crate::domains::videos::models::{Video, NewVideo};
use crate::domains::reactions::models::{ReactionState, LikeCounts};
use crate::domains::social::models::{Comment, NewComment};

#[derive(Default)]
struct Tables {
    next_user_id: u64,
    next_video_id: u64,
    next_comment_id: u64,
    /// 시청 순서 (최근 시청 순 정렬용)
    next_view_seq: u64,
    users: BTreeMap<u64, User>,
    videos: BTreeMap<u64, Video>,
    /// key: (video_id, user_id)
    reactions: HashMap<(u64, u64), ReactionState>,
    comments: BTreeMap<u64, Comment>,
    /// key: (subscriber_id, author_id), value: 생성 순서
    subscriptions: BTreeMap<(u64, u64), u64>,
    /// key: (video_id, user_id), value: 시청 순서
    views: HashMap<(u64, u64), u64>,
    next_subscription_seq: u64,
}

impl Tables {
    fn remove_video_cascade(&mut self, video_id: u64) -> bool {
        if self.videos.remove(&video_id).is_none() {
            return false;
        }
        self.reactions.retain(|(v, _), _| *v != video_id);
        self.comments.retain(|_, c| c.video_id != video_id);
        self.views.retain(|(v, _), _| *v != video_id);
        true
    }

    fn remove_user_cascade(&mut self, user_id: u64) -> bool {
        if self.users.remove(&user_id).is_none() {
            return false;
        }
        let owned: Vec<u64> = self
            .videos
            .values()
            .filter(|v| v.author_id == user_id)
            .map(|v| v.id)
            .collect();
        for video_id in owned {
            self.remove_video_cascade(video_id);
        }
        self.reactions.retain(|(_, u), _| *u != user_id);
        self.comments.retain(|_, c| c.author_id != user_id);
        self.views.retain(|(_, u), _| *u != user_id);
        self.subscriptions
            .retain(|(s, a), _| *s != user_id && *a != user_id);
        true
    }
}

/// 인메모리 저장소 (모든 store trait 구현)
/// In-memory implementation of every store trait
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn duplicate(constraint: &str) -> StoreError {
        StoreError::Duplicate {
            constraint: constraint.to_string(),
        }
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get_by_id(&self, id: u64) -> Result<Option<User>, StoreError> {
        Ok(self.tables.lock().users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.lock();
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.lock();
        Ok(tables.users.values().find(|u| u.username == username).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.lock();

        if tables.users.values().any(|u| u.email == user.email) {
            return Err(Self::duplicate("users_email_key"));
        }
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(Self::duplicate("users_username_key"));
        }

        tables.next_user_id += 1;
        let created = User {
            id: tables.next_user_id,
            email: user.email,
            username: user.username,
            password_hash: user.password_hash,
            refresh_token: None,
            is_active: true,
            created_at: Utc::now(),
        };
        tables.users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn set_refresh_token(&self, id: u64, token_hash: Option<&str>) -> Result<(), StoreError> {
        if let Some(user) = self.tables.lock().users.get_mut(&id) {
            user.refresh_token = token_hash.map(str::to_string);
        }
        Ok(())
    }

    async fn rotate_refresh_token(
        &self,
        id: u64,
        expected_hash: &str,
        new_hash: &str,
    ) -> Result<bool, StoreError> {
        let mut tables = self.tables.lock();
        match tables.users.get_mut(&id) {
            Some(user) if user.refresh_token.as_deref() == Some(expected_hash) => {
                user.refresh_token = Some(new_hash.to_string());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, id: u64) -> Result<bool, StoreError> {
        Ok(self.tables.lock().remove_user_cascade(id))
    }
}

#[async_trait]
impl VideoStore for MemoryStore {
    async fn get_by_id(&self, id: u64) -> Result<Option<Video>, StoreError> {
        Ok(self.tables.lock().videos.get(&id).cloned())
    }

    async fn create(&self, video: NewVideo) -> Result<Video, StoreError> {
        let mut tables = self.tables.lock();
        // FK: author must exist
        if !tables.users.contains_key(&video.author_id) {
            return Err(StoreError::Unavailable(format!(
                "foreign key violation: author {} does not exist",
                video.author_id
            )));
        }

        tables.next_video_id += 1;
        let created = Video {
            id: tables.next_video_id,
            video_name: video.video_name,
            description: video.description,
            author_id: video.author_id,
            created_at: Utc::now(),
        };
        tables.videos.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list_all(&self) -> Result<Vec<Video>, StoreError> {
        // id는 생성 순서이므로 역순 = 최신순
        Ok(self.tables.lock().videos.values().rev().cloned().collect())
    }

    async fn list_by_author(&self, author_id: u64) -> Result<Vec<Video>, StoreError> {
        Ok(self
            .tables
            .lock()
            .videos
            .values()
            .rev()
            .filter(|v| v.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: u64) -> Result<bool, StoreError> {
        Ok(self.tables.lock().remove_video_cascade(id))
    }
}

#[async_trait]
impl ReactionStore for MemoryStore {
    async fn upsert(&self, state: &ReactionState) -> Result<ReactionState, StoreError> {
        let mut tables = self.tables.lock();
        if !tables.videos.contains_key(&state.video_id) || !tables.users.contains_key(&state.user_id) {
            return Err(StoreError::Unavailable(
                "foreign key violation: video or user does not exist".to_string(),
            ));
        }

        tables
            .reactions
            .insert((state.video_id, state.user_id), state.clone());
        Ok(state.clone())
    }

    async fn find(&self, video_id: u64, user_id: u64) -> Result<Option<ReactionState>, StoreError> {
        Ok(self.tables.lock().reactions.get(&(video_id, user_id)).cloned())
    }

    async fn count_for_video(&self, video_id: u64) -> Result<LikeCounts, StoreError> {
        let tables = self.tables.lock();
        let counts = tables
            .reactions
            .values()
            .filter(|r| r.video_id == video_id)
            .fold(LikeCounts::default(), |mut acc, r| {
                if r.is_like {
                    acc.likes += 1;
                }
                if r.is_dislike {
                    acc.dislikes += 1;
                }
                acc
            });
        Ok(counts)
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn create(&self, comment: NewComment) -> Result<Comment, StoreError> {
        let mut tables = self.tables.lock();
        if !tables.videos.contains_key(&comment.video_id) {
            return Err(StoreError::Unavailable(format!(
                "foreign key violation: video {} does not exist",
                comment.video_id
            )));
        }

        tables.next_comment_id += 1;
        let created = Comment {
            id: tables.next_comment_id,
            video_id: comment.video_id,
            author_id: comment.author_id,
            text: comment.text,
            created_at: Utc::now(),
        };
        tables.comments.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list_by_video(&self, video_id: u64) -> Result<Vec<Comment>, StoreError> {
        Ok(self
            .tables
            .lock()
            .comments
            .values()
            .filter(|c| c.video_id == video_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SubscriptionStore for MemoryStore {
    async fn insert(&self, subscriber_id: u64, author_id: u64) -> Result<(), StoreError> {
        let mut tables = self.tables.lock();
        if tables.subscriptions.contains_key(&(subscriber_id, author_id)) {
            return Err(Self::duplicate("subscriptions_pkey"));
        }
        tables.next_subscription_seq += 1;
        let seq = tables.next_subscription_seq;
        tables.subscriptions.insert((subscriber_id, author_id), seq);
        Ok(())
    }

    async fn remove(&self, subscriber_id: u64, author_id: u64) -> Result<bool, StoreError> {
        Ok(self
            .tables
            .lock()
            .subscriptions
            .remove(&(subscriber_id, author_id))
            .is_some())
    }

    async fn list_authors(&self, subscriber_id: u64) -> Result<Vec<u64>, StoreError> {
        let tables = self.tables.lock();
        let mut authors: Vec<(u64, u64)> = tables
            .subscriptions
            .iter()
            .filter(|((s, _), _)| *s == subscriber_id)
            .map(|((_, a), seq)| (*seq, *a))
            .collect();
        authors.sort();
        Ok(authors.into_iter().map(|(_, a)| a).collect())
    }

    async fn count_subscribers(&self, author_id: u64) -> Result<u64, StoreError> {
        let tables = self.tables.lock();
        Ok(tables
            .subscriptions
            .keys()
            .filter(|(_, a)| *a == author_id)
            .count() as u64)
    }
}

#[async_trait]
impl ViewStore for MemoryStore {
    async fn insert(&self, video_id: u64, user_id: u64) -> Result<(), StoreError> {
        let mut tables = self.tables.lock();
        if tables.views.contains_key(&(video_id, user_id)) {
            return Err(Self::duplicate("views_pkey"));
        }
        tables.next_view_seq += 1;
        let seq = tables.next_view_seq;
        tables.views.insert((video_id, user_id), seq);
        Ok(())
    }

    async fn count_for_video(&self, video_id: u64) -> Result<u64, StoreError> {
        let tables = self.tables.lock();
        Ok(tables.views.keys().filter(|(v, _)| *v == video_id).count() as u64)
    }

    async fn list_by_user(&self, user_id: u64) -> Result<Vec<u64>, StoreError> {
        let tables = self.tables.lock();
        let mut watched: Vec<(u64, u64)> = tables
            .views
            .iter()
            .filter(|((_, u), _)| *u == user_id)
            .map(|((v, _), seq)| (*seq, *v))
            .collect();
        // 최근 시청 순
        watched.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(watched.into_iter().map(|(_, v)| v).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::database::Stores;
    use std::sync::Arc;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            email: format!("{}@x.com", name),
            username: name.to_string(),
            password_hash: "dummy_hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_and_username_rejected() {
        let stores = Stores::memory();
        stores.users.create(new_user("alice")).await.unwrap();

        let same_email = NewUser {
            username: "other".to_string(),
            ..new_user("alice")
        };
        assert!(matches!(
            stores.users.create(same_email).await,
            Err(StoreError::Duplicate { .. })
        ));

        let same_name = NewUser {
            email: "other@x.com".to_string(),
            ..new_user("alice")
        };
        assert!(matches!(
            stores.users.create(same_name).await,
            Err(StoreError::Duplicate { .. })
        ));
    }

    #[tokio::test]
    async fn test_rotate_refresh_token_is_compare_and_swap() {
        let stores = Stores::memory();
        let user = stores.users.create(new_user("alice")).await.unwrap();
        stores.users.set_refresh_token(user.id, Some("a")).await.unwrap();

        assert!(!stores.users.rotate_refresh_token(user.id, "b", "c").await.unwrap());
        assert!(stores.users.rotate_refresh_token(user.id, "a", "c").await.unwrap());
        // 이전 값으로는 다시 교체 불가
        assert!(!stores.users.rotate_refresh_token(user.id, "a", "d").await.unwrap());

        let stored = stores.users.get_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(stored.refresh_token.as_deref(), Some("c"));
    }

    #[tokio::test]
    async fn test_user_delete_cascades() {
        let memory = Arc::new(MemoryStore::new());
        let stores = Stores::from_memory(memory);
        let author = stores.users.create(new_user("author")).await.unwrap();
        let viewer = stores.users.create(new_user("viewer")).await.unwrap();
        let video = stores
            .videos
            .create(NewVideo {
                video_name: "clip".to_string(),
                description: None,
                author_id: author.id,
            })
            .await
            .unwrap();
        stores.views.insert(video.id, viewer.id).await.unwrap();
        stores.subscriptions.insert(viewer.id, author.id).await.unwrap();

        assert!(stores.users.delete(author.id).await.unwrap());

        assert!(stores.videos.get_by_id(video.id).await.unwrap().is_none());
        assert_eq!(stores.views.count_for_video(video.id).await.unwrap(), 0);
        assert!(stores.subscriptions.list_authors(viewer.id).await.unwrap().is_empty());
        assert!(!stores.users.delete(author.id).await.unwrap());
    }
}

use std::sync::Arc;
use crate::shared::database::{SubscriptionStore, UserStore};
use crate::shared::errors::{ApiError, StoreError};

/// 구독 서비스
/// Subscription Service
///
/// (subscriber, author) 쌍의 유일성은 저장소의 기본 키가 보장합니다.
#[derive(Clone)]
pub struct SubscriptionService {
    subscriptions: Arc<dyn SubscriptionStore>,
    users: Arc<dyn UserStore>,
}

impl SubscriptionService {
    pub fn new(subscriptions: Arc<dyn SubscriptionStore>, users: Arc<dyn UserStore>) -> Self {
        Self { subscriptions, users }
    }

    pub async fn subscribe(&self, subscriber_id: u64, author_id: u64) -> Result<(), ApiError> {
        if subscriber_id == author_id {
            return Err(ApiError::SubscribeToYourself);
        }
        self.ensure_user(author_id).await?;

        match self.subscriptions.insert(subscriber_id, author_id).await {
            Ok(()) => {
                tracing::debug!(subscriber_id, author_id, "subscribed");
                Ok(())
            }
            Err(StoreError::Duplicate { .. }) => Err(ApiError::AlreadySubscribed),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn unsubscribe(&self, subscriber_id: u64, author_id: u64) -> Result<(), ApiError> {
        self.ensure_user(author_id).await?;

        if !self.subscriptions.remove(subscriber_id, author_id).await? {
            return Err(ApiError::AlreadyUnsubscribed);
        }
        tracing::debug!(subscriber_id, author_id, "unsubscribed");
        Ok(())
    }

    /// 구독 중인 작성자 ID 목록 (구독한 순)
    pub async fn get_subscriptions(&self, subscriber_id: u64) -> Result<Vec<u64>, ApiError> {
        Ok(self.subscriptions.list_authors(subscriber_id).await?)
    }

    pub async fn get_subscriber_count(&self, author_id: u64) -> Result<u64, ApiError> {
        self.ensure_user(author_id).await?;
        Ok(self.subscriptions.count_subscribers(author_id).await?)
    }

    async fn ensure_user(&self, user_id: u64) -> Result<(), ApiError> {
        match self.users.get_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(ApiError::AccountNotFound),
        }
    }
}

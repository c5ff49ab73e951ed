use std::sync::Arc;
use crate::shared::database::{VideoStore, ViewStore};
use crate::shared::errors::{ApiError, StoreError};

/// 시청 기록 서비스
/// View history: at most one view per (user, video)
#[derive(Clone)]
pub struct ViewService {
    views: Arc<dyn ViewStore>,
    videos: Arc<dyn VideoStore>,
}

impl ViewService {
    pub fn new(views: Arc<dyn ViewStore>, videos: Arc<dyn VideoStore>) -> Self {
        Self { views, videos }
    }

    pub async fn watch_video(&self, user_id: u64, video_id: u64) -> Result<(), ApiError> {
        self.ensure_video(video_id).await?;

        match self.views.insert(video_id, user_id).await {
            Ok(()) => Ok(()),
            Err(StoreError::Duplicate { .. }) => Err(ApiError::AlreadyWatched),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_video_views(&self, video_id: u64) -> Result<u64, ApiError> {
        self.ensure_video(video_id).await?;
        Ok(self.views.count_for_video(video_id).await?)
    }

    /// 최근 시청 순 동영상 ID
    pub async fn get_view_history(&self, user_id: u64) -> Result<Vec<u64>, ApiError> {
        Ok(self.views.list_by_user(user_id).await?)
    }

    async fn ensure_video(&self, video_id: u64) -> Result<(), ApiError> {
        match self.videos.get_by_id(video_id).await? {
            Some(_) => Ok(()),
            None => Err(ApiError::VideoNotExist),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::database::Stores;
    use crate::domains::auth::models::NewUser;
    use crate::domains::videos::models::NewVideo;

    #[tokio::test]
    async fn test_watch_once_per_user() {
        let stores = Stores::memory();
        let user = stores
            .users
            .create(NewUser {
                email: "viewer@x.com".to_string(),
                username: "viewer".to_string(),
                password_hash: "dummy_hash".to_string(),
            })
            .await
            .unwrap();
        let mut video_ids = Vec::new();
        for name in ["first", "second"] {
            let video = stores
                .videos
                .create(NewVideo {
                    video_name: name.to_string(),
                    description: None,
                    author_id: user.id,
                })
                .await
                .unwrap();
            video_ids.push(video.id);
        }
        let service = ViewService::new(stores.views.clone(), stores.videos.clone());

        service.watch_video(user.id, video_ids[0]).await.unwrap();
        service.watch_video(user.id, video_ids[1]).await.unwrap();
        assert_eq!(
            service.watch_video(user.id, video_ids[0]).await,
            Err(ApiError::AlreadyWatched)
        );

        assert_eq!(service.get_video_views(video_ids[0]).await.unwrap(), 1);
        assert_eq!(
            service.get_view_history(user.id).await.unwrap(),
            vec![video_ids[1], video_ids[0]]
        );
        assert_eq!(service.watch_video(user.id, 999).await, Err(ApiError::VideoNotExist));
        assert_eq!(service.get_video_views(999).await, Err(ApiError::VideoNotExist));
    }
}

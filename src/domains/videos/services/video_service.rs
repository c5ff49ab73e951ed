use std::sync::Arc;
use crate::shared::database::{UserStore, VideoStore};
use crate::shared::errors::ApiError;
use crate::domains::videos::models::{Video, NewVideo, CreateVideoRequest};

// 동영상 서비스
// VideoService: video metadata lifecycle
#[derive(Clone)]
pub struct VideoService {
    videos: Arc<dyn VideoStore>,
    users: Arc<dyn UserStore>,
}

impl VideoService {
    pub fn new(videos: Arc<dyn VideoStore>, users: Arc<dyn UserStore>) -> Self {
        Self { videos, users }
    }

    /// 동영상 메타데이터 등록
    /// Register video metadata for an authenticated author
    pub async fn create_video(
        &self,
        author_id: u64,
        request: CreateVideoRequest,
    ) -> Result<Video, ApiError> {
        let video_name = request.video_name.trim();
        if video_name.is_empty() {
            return Err(ApiError::VideoNameEmpty);
        }

        let description = request
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let video = self
            .videos
            .create(NewVideo {
                video_name: video_name.to_string(),
                description,
                author_id,
            })
            .await?;

        tracing::info!(video_id = video.id, author_id, "video created");
        Ok(video)
    }

    pub async fn get_video(&self, video_id: u64) -> Result<Video, ApiError> {
        self.videos
            .get_by_id(video_id)
            .await?
            .ok_or(ApiError::VideoNotExist)
    }

    pub async fn list_videos(&self) -> Result<Vec<Video>, ApiError> {
        Ok(self.videos.list_all().await?)
    }

    pub async fn list_user_videos(&self, user_id: u64) -> Result<Vec<Video>, ApiError> {
        if self.users.get_by_id(user_id).await?.is_none() {
            return Err(ApiError::AccountNotFound);
        }
        Ok(self.videos.list_by_author(user_id).await?)
    }

    /// 작성자만 삭제 가능
    /// Only the author may delete a video
    pub async fn delete_video(&self, user_id: u64, video_id: u64) -> Result<(), ApiError> {
        let video = self.get_video(video_id).await?;
        if video.author_id != user_id {
            return Err(ApiError::NotVideoAuthor);
        }

        if !self.videos.delete(video_id).await? {
            return Err(ApiError::VideoNotExist);
        }

        tracing::info!(video_id, user_id, "video deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::database::Stores;
    use crate::domains::auth::models::NewUser;

    async fn setup() -> (VideoService, Stores, u64) {
        let stores = Stores::memory();
        let author = stores
            .users
            .create(NewUser {
                email: "author@x.com".to_string(),
                username: "author".to_string(),
                password_hash: "dummy_hash".to_string(),
            })
            .await
            .unwrap();
        (VideoService::new(stores.videos.clone(), stores.users.clone()), stores, author.id)
    }

    fn request(name: &str) -> CreateVideoRequest {
        CreateVideoRequest {
            video_name: name.to_string(),
            description: Some("  ".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_video() {
        let (service, _, author_id) = setup().await;

        let video = service.create_video(author_id, request(" clip ")).await.unwrap();
        assert_eq!(video.video_name, "clip");
        assert_eq!(video.description, None);
        assert_eq!(service.get_video(video.id).await.unwrap(), video);
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let (service, _, author_id) = setup().await;
        assert_eq!(
            service.create_video(author_id, request("   ")).await,
            Err(ApiError::VideoNameEmpty)
        );
    }

    #[tokio::test]
    async fn test_missing_video_and_user() {
        let (service, _, _) = setup().await;
        assert_eq!(service.get_video(999).await, Err(ApiError::VideoNotExist));
        assert_eq!(service.list_user_videos(999).await, Err(ApiError::AccountNotFound));
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let (service, _, author_id) = setup().await;
        let first = service.create_video(author_id, request("first")).await.unwrap();
        let second = service.create_video(author_id, request("second")).await.unwrap();

        let ids: Vec<u64> = service.list_videos().await.unwrap().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
        assert_eq!(service.list_user_videos(author_id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_only_author_deletes() {
        let (service, stores, author_id) = setup().await;
        let other = stores
            .users
            .create(NewUser {
                email: "other@x.com".to_string(),
                username: "other".to_string(),
                password_hash: "dummy_hash".to_string(),
            })
            .await
            .unwrap();
        let video = service.create_video(author_id, request("clip")).await.unwrap();

        assert_eq!(service.delete_video(other.id, video.id).await, Err(ApiError::NotVideoAuthor));
        service.delete_video(author_id, video.id).await.unwrap();
        assert_eq!(service.get_video(video.id).await, Err(ApiError::VideoNotExist));
    }
}

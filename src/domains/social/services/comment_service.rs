use std::sync::Arc;
use crate::shared::database::{CommentStore, VideoStore};
use crate::shared::errors::ApiError;
use crate::domains::social::models::{Comment, NewComment, AddCommentRequest};

/// 댓글 서비스
/// Comment Service
#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentStore>,
    videos: Arc<dyn VideoStore>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentStore>, videos: Arc<dyn VideoStore>) -> Self {
        Self { comments, videos }
    }

    /// 댓글 작성
    /// Add a comment to a video
    pub async fn add_comment(
        &self,
        author_id: u64,
        request: AddCommentRequest,
    ) -> Result<Comment, ApiError> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(ApiError::CommentEmpty);
        }
        self.ensure_video(request.video_id).await?;

        let comment = self
            .comments
            .create(NewComment {
                video_id: request.video_id,
                author_id,
                text: text.to_string(),
            })
            .await?;

        tracing::debug!(comment_id = comment.id, video_id = comment.video_id, "comment added");
        Ok(comment)
    }

    /// 동영상 댓글 목록 (오래된 순)
    pub async fn get_comments(&self, video_id: u64) -> Result<Vec<Comment>, ApiError> {
        self.ensure_video(video_id).await?;
        Ok(self.comments.list_by_video(video_id).await?)
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

    async fn setup() -> (CommentService, u64, u64) {
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
        let video = stores
            .videos
            .create(NewVideo {
                video_name: "clip".to_string(),
                description: None,
                author_id: user.id,
            })
            .await
            .unwrap();
        (CommentService::new(stores.comments.clone(), stores.videos.clone()), user.id, video.id)
    }

    fn request(video_id: u64, text: &str) -> AddCommentRequest {
        AddCommentRequest { video_id, text: text.to_string() }
    }

    #[tokio::test]
    async fn test_comments_listed_oldest_first() {
        let (service, user_id, video_id) = setup().await;

        service.add_comment(user_id, request(video_id, "first")).await.unwrap();
        service.add_comment(user_id, request(video_id, " second ")).await.unwrap();

        let texts: Vec<String> = service
            .get_comments(video_id)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.text)
            .collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_blank_comment_rejected() {
        let (service, user_id, video_id) = setup().await;
        assert_eq!(
            service.add_comment(user_id, request(video_id, "  ")).await,
            Err(ApiError::CommentEmpty)
        );
    }

    #[tokio::test]
    async fn test_comment_on_missing_video() {
        let (service, user_id, _) = setup().await;
        assert_eq!(
            service.add_comment(user_id, request(999, "hello")).await,
            Err(ApiError::VideoNotExist)
        );
        assert_eq!(service.get_comments(999).await, Err(ApiError::VideoNotExist));
    }
}

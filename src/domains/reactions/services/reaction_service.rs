// =====================================================
// 평가 엔진 (좋아요 / 싫어요 / 중립)
// Rating Engine
// =====================================================
// (user, video) 쌍마다 반응 행은 최대 하나입니다.
// 읽고-쓰기 대신 저장소의 단일 upsert로 처리하므로
// 같은 쌍에 대한 동시 요청은 유니크 키에서 직렬화됩니다.
//
// 중립(neutral)은 행 삭제가 아니라 두 플래그가 false인 행입니다.
// =====================================================

use std::sync::Arc;
use crate::shared::database::{UserStore, VideoStore, ReactionStore};
use crate::shared::errors::ApiError;
use crate::domains::reactions::models::{Reaction, ReactionState, LikeCounts};

#[derive(Clone)]
pub struct ReactionService {
    videos: Arc<dyn VideoStore>,
    users: Arc<dyn UserStore>,
    reactions: Arc<dyn ReactionStore>,
}

impl ReactionService {
    pub fn new(
        videos: Arc<dyn VideoStore>,
        users: Arc<dyn UserStore>,
        reactions: Arc<dyn ReactionStore>,
    ) -> Self {
        Self { videos, users, reactions }
    }

    /// 동영상 평가
    /// Rate a video
    ///
    /// 동영상 → 사용자 순서로 존재 확인 후 단일 upsert.
    /// Checks the video, then the user, then writes one upsert.
    pub async fn rate_video(
        &self,
        user_id: u64,
        video_id: u64,
        reaction: Reaction,
    ) -> Result<ReactionState, ApiError> {
        self.ensure_video(video_id).await?;
        if self.users.get_by_id(user_id).await?.is_none() {
            return Err(ApiError::AccountNotFound);
        }

        let state = self
            .reactions
            .upsert(&ReactionState::new(video_id, user_id, reaction))
            .await?;

        tracing::debug!(video_id, user_id, ?reaction, "video rated");
        Ok(state)
    }

    /// 좋아요/싫어요 개수
    pub async fn get_video_number_of_likes_and_dislikes(
        &self,
        video_id: u64,
    ) -> Result<LikeCounts, ApiError> {
        self.ensure_video(video_id).await?;
        Ok(self.reactions.count_for_video(video_id).await?)
    }

    /// 사용자의 반응 조회 (행이 없으면 neutral)
    /// A missing row reads as neutral, the same as an explicit neutral row
    pub async fn get_user_reaction_to_video(
        &self,
        user_id: u64,
        video_id: u64,
    ) -> Result<Reaction, ApiError> {
        Ok(self
            .reactions
            .find(video_id, user_id)
            .await?
            .map(|state| state.reaction())
            .unwrap_or(Reaction::Neutral))
    }

    async fn ensure_video(&self, video_id: u64) -> Result<(), ApiError> {
        match self.videos.get_by_id(video_id).await? {
            Some(_) => Ok(()),
            None => Err(ApiError::VideoNotExist),
        }
    }
}

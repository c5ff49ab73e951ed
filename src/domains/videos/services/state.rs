// Video domain state
// 동영상 도메인 상태
use crate::shared::database::Stores;
use crate::domains::videos::services::VideoService;

/// Video domain state
#[derive(Clone)]
pub struct VideoState {
    pub video_service: VideoService,
}

impl VideoState {
    pub fn new(stores: &Stores) -> Self {
        Self {
            video_service: VideoService::new(stores.videos.clone(), stores.users.clone()),
        }
    }
}

// Social domain state
// 소셜 도메인 상태 (댓글, 구독, 시청 기록)
use crate::shared::database::Stores;
use crate::domains::social::services::{CommentService, SubscriptionService, ViewService};

#[derive(Clone)]
pub struct SocialState {
    pub comment_service: CommentService,
    pub subscription_service: SubscriptionService,
    pub view_service: ViewService,
}

impl SocialState {
    pub fn new(stores: &Stores) -> Self {
        Self {
            comment_service: CommentService::new(stores.comments.clone(), stores.videos.clone()),
            subscription_service: SubscriptionService::new(
                stores.subscriptions.clone(),
                stores.users.clone(),
            ),
            view_service: ViewService::new(stores.views.clone(), stores.videos.clone()),
        }
    }
}

// Reaction domain state
// 평가 도메인 상태
use crate::shared::database::Stores;
use crate::domains::reactions::services::ReactionService;

#[derive(Clone)]
pub struct RatingState {
    pub reaction_service: ReactionService,
}

impl RatingState {
    pub fn new(stores: &Stores) -> Self {
        Self {
            reaction_service: ReactionService::new(
                stores.videos.clone(),
                stores.users.clone(),
                stores.reactions.clone(),
            ),
        }
    }
}

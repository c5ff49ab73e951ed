use crate::shared::database::Stores;
use crate::domains::auth::services::{AuthState, JwtService};
use crate::domains::videos::services::VideoState;
use crate::domains::reactions::services::RatingState;
use crate::domains::social::services::SocialState;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 저장소 구현(PostgreSQL / 인메모리)과 무관하게 같은 서비스 그래프를 구성합니다.
#[derive(Clone)]
pub struct AppState {
    pub auth_state: AuthState,
    pub video_state: VideoState,
    pub rating_state: RatingState,
    pub social_state: SocialState,
}

impl AppState {
    /// 모든 도메인 State를 초기화하고 조합
    pub fn new(stores: &Stores, jwt_service: JwtService) -> Self {
        Self {
            auth_state: AuthState::new(stores, jwt_service),
            video_state: VideoState::new(stores),
            rating_state: RatingState::new(stores),
            social_state: SocialState::new(stores),
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 사용자의 동영상 반응 (세 가지 중 정확히 하나)
/// A user's stance on a video, exactly one of three
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Like,
    Dislike,
    Neutral,
}

/// (video_id, user_id) 쌍으로 식별되는 반응 행
/// Reaction row, identified by the (video_id, user_id) pair
///
/// `is_like`와 `is_dislike`가 동시에 true인 경우는 없습니다.
/// Both flags are never true at once: writes go through [`ReactionState::new`],
/// and rows read back are guarded by the table's `CHECK (NOT (is_like AND is_dislike))`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[schema(as = ReactionState)]
pub struct ReactionState {
    pub video_id: u64,
    pub user_id: u64,
    pub is_like: bool,
    pub is_dislike: bool,
}

impl ReactionState {
    /// LIKE → like만, DISLIKE → dislike만, NEUTRAL → 둘 다 false
    pub fn new(video_id: u64, user_id: u64, reaction: Reaction) -> Self {
        Self {
            video_id,
            user_id,
            is_like: reaction == Reaction::Like,
            is_dislike: reaction == Reaction::Dislike,
        }
    }

    /// 플래그를 세 가지 상태 중 하나로 변환
    /// Map the flags back to one of the three states
    pub fn reaction(&self) -> Reaction {
        match (self.is_like, self.is_dislike) {
            (true, false) => Reaction::Like,
            (false, true) => Reaction::Dislike,
            _ => Reaction::Neutral,
        }
    }
}

/// 좋아요/싫어요 개수
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Default)]
#[schema(as = LikeCounts)]
pub struct LikeCounts {
    pub likes: u64,
    pub dislikes: u64,
}

// 평가 요청 모델
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = RateVideoRequest)]
pub struct RateVideoRequest {
    #[schema(example = 1)]
    pub video_id: u64,

    pub reaction: Reaction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_flags_are_exclusive() {
        for reaction in [Reaction::Like, Reaction::Dislike, Reaction::Neutral] {
            let state = ReactionState::new(1, 2, reaction);
            assert!(!(state.is_like && state.is_dislike));
            assert_eq!(state.reaction(), reaction);
        }
    }

    #[test]
    fn test_reaction_wire_names() {
        assert_eq!(serde_json::to_string(&Reaction::Like).unwrap(), "\"like\"");
        let parsed: Reaction = serde_json::from_str("\"neutral\"").unwrap();
        assert_eq!(parsed, Reaction::Neutral);
        assert!(serde_json::from_str::<Reaction>("\"LOVE\"").is_err());
    }
}

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// 댓글
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[schema(as = Comment)]
pub struct Comment {
    pub id: u64,
    pub video_id: u64,
    pub author_id: u64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub video_id: u64,
    pub author_id: u64,
    pub text: String,
}

// 댓글 작성 요청 모델
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = AddCommentRequest)]
pub struct AddCommentRequest {
    #[schema(example = 1)]
    pub video_id: u64,

    #[schema(example = "Nice video!")]
    pub text: String,
}

// 구독 요청 모델
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = AuthorIdRequest)]
pub struct AuthorIdRequest {
    #[schema(example = 2)]
    pub author_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[schema(as = CountResponse)]
pub struct CountResponse {
    pub count: u64,
}

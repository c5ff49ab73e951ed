use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// 동영상 메타데이터 (파일 자체는 오브젝트 스토리지에 저장)
/// Video metadata; the media itself lives in object storage
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[schema(as = Video)]
pub struct Video {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "My first video")]
    pub video_name: String,

    pub description: Option<String>,

    /// 업로드한 사용자 ID
    /// Uploader's user id
    pub author_id: u64,

    pub created_at: DateTime<Utc>,
}

/// 동영상 생성 데이터
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub video_name: String,
    pub description: Option<String>,
    pub author_id: u64,
}

// 동영상 생성 요청 모델
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = CreateVideoRequest)]
pub struct CreateVideoRequest {
    #[schema(example = "My first video")]
    pub video_name: String,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = VideoIdRequest)]
pub struct VideoIdRequest {
    #[schema(example = 1)]
    pub video_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = UserIdRequest)]
pub struct UserIdRequest {
    #[schema(example = 1)]
    pub user_id: u64,
}

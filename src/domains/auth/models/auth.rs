use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 회원가입 요청 모델
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = RegisterRequest)]
pub struct RegisterRequest {
    /// Email address
    /// 이메일 주소
    #[schema(example = "alice@x.com")]
    pub email: String,

    /// Username (unique)
    /// 사용자명 (중복 불가)
    #[schema(example = "alice")]
    pub username: String,

    /// Password (will be hashed)
    /// 비밀번호 (해싱됨)
    #[schema(example = "pw123")]
    pub password: String,
}

// 로그인 요청 모델
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = LoginRequest)]
pub struct LoginRequest {
    /// Email address
    /// 이메일 주소
    #[schema(example = "alice@x.com")]
    pub email: String,

    /// Password
    /// 비밀번호
    #[schema(example = "pw123")]
    pub password: String,
}

/// 단순 메시지 응답
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = MessageResponse)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

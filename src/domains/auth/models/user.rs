use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// 사용자 모델 (DB 저장용)
/// User model (for database storage)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    /// 현재 유효한 refresh token의 SHA-256 해시 (사용자당 하나)
    /// SHA-256 digest of the single live refresh token, overwritten on login/refresh
    pub refresh_token: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// 사용자 생성 요청 (회원가입 시)
/// User creation data (at registration)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

/// 사용자 응답 모델 (비밀번호, 토큰 제외)
/// User response (password hash and refresh token are never exposed)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[schema(as = UserResponse)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "alice@x.com")]
    pub email: String,

    #[schema(example = "alice")]
    pub username: String,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

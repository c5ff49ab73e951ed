use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT Claims (토큰에 포함될 데이터)
/// JWT Claims (data to be included in token)
///
/// access token과 refresh token은 같은 구조이며 만료 시간만 다릅니다.
/// Access and refresh tokens share this shape and differ only in lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// 사용자 ID (문자열)
    /// User ID as a string subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// 만료 시간 (UTC Unix timestamp)
    /// Expiration time (UTC Unix timestamp)
    pub exp: i64,

    /// 발급 시간 (UTC Unix timestamp)
    #[serde(default)]
    pub iat: i64,

    /// 토큰 고유 ID (같은 초에 발급된 토큰도 서로 다름)
    /// Unique token id; two tokens minted in the same second never collide
    #[serde(default)]
    pub jti: String,
}

/// Access/Refresh Token 쌍
/// Access/refresh token pair
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[schema(as = TokenPair)]
pub struct TokenPair {
    /// JWT Access Token (짧은 수명)
    /// JWT Access Token (short lifetime)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    /// JWT Refresh Token (긴 수명, 해시가 DB에 저장됨)
    /// JWT Refresh Token (long lifetime, its digest is stored in the database)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

use axum::http::HeaderMap;
use crate::domains::auth::models::User;
use crate::domains::auth::services::AuthService;
use crate::shared::errors::ApiError;

/// 보호된 메서드용 헤더
pub const ACCESS_TOKEN_HEADER: &str = "access-token";

/// refresh_tokens 전용 헤더
pub const REFRESH_TOKEN_HEADER: &str = "refresh-token";

/// 인증된 사용자 정보 (access token에서 추출 후 저장소에서 확인)
/// Authenticated user, resolved from the access token and the credential store
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: u64,
    pub user: User,
}

impl AuthenticatedUser {
    /// 요청 헤더에서 사용자 확인
    /// Resolve the caller of a protected method
    ///
    /// 1. `access-token` 헤더가 없으면 AccessTokenMissing
    /// 2. 토큰 검증 (TokenError / TokenExpired / TokenSubjectMissing)
    /// 3. 사용자가 없거나 비활성이면 AccountNotFound
    pub async fn from_headers(
        auth_service: &AuthService,
        headers: &HeaderMap,
    ) -> Result<Self, ApiError> {
        let token = extract_token(headers, ACCESS_TOKEN_HEADER)?
            .ok_or(ApiError::AccessTokenMissing)?;

        let user = auth_service.authenticate(token).await?;
        Ok(Self { user_id: user.id, user })
    }
}

/// `refresh-token` 헤더 추출 (검증은 AuthService::refresh에서)
pub fn require_refresh_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    extract_token(headers, REFRESH_TOKEN_HEADER)?.ok_or(ApiError::RefreshTokenMissing)
}

/// 헤더 값 추출
///
/// 헤더가 없으면 `Ok(None)`. 값이 있지만 ASCII로 읽을 수 없으면 TokenError
/// (존재하지 않는 것과 잘못된 것은 구분).
pub fn extract_token<'a>(headers: &'a HeaderMap, name: &str) -> Result<Option<&'a str>, ApiError> {
    match headers.get(name) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(|v| Some(v.trim()))
            .map_err(|_| ApiError::TokenError),
    }
}

use thiserror::Error;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::shared::errors::StoreError;

/// 클라이언트에 노출되는 에러
/// Client-visible errors, delivered as a JSON-RPC `{code, message}` pair
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 인증 (1000)
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// 일반 인증 실패 (예: 저장된 refresh token 불일치)
    /// Generic authentication failure (e.g. refresh token mismatch)
    #[error("Auth error")]
    AuthError,

    /// 이메일 또는 사용자명 중복
    /// Duplicate email or username at registration
    #[error("Register error")]
    RegisterError,

    #[error("Account not found")]
    AccountNotFound,

    /// 서명 또는 형식이 잘못된 토큰
    /// Token signature or shape invalid
    #[error("Invalid token")]
    TokenError,

    #[error("The token expired")]
    TokenExpired,

    #[error("Token sub empty")]
    TokenSubjectMissing,

    #[error("The access token is missing in header")]
    AccessTokenMissing,

    #[error("The refresh token is missing in header")]
    RefreshTokenMissing,

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 동영상 (5000)
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    #[error("No video with this id found")]
    VideoNotExist,

    #[error("Video name is empty")]
    VideoNameEmpty,

    #[error("Only the author can modify this video")]
    NotVideoAuthor,

    #[error("Comment text is empty")]
    CommentEmpty,

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 소셜 (7000)
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    #[error("User already subscribed to author")]
    AlreadySubscribed,

    #[error("User already unsubscribed to author")]
    AlreadyUnsubscribed,

    #[error("User already watched this video")]
    AlreadyWatched,

    #[error("User can't subscribe to yourself")]
    SubscribeToYourself,

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 서버 / 프로토콜
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// 저장소 연결 불가 (중복 에러와 구분)
    /// Storage unavailable (kept apart from duplicate-key failures)
    #[error("Storage unavailable")]
    StorageUnavailable,

    #[error("Parse error")]
    ParseError,

    #[error("Invalid request")]
    InvalidRequest,

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error")]
    Internal(String),
}

/// JSON-RPC error object
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ErrorBody {
    #[schema(example = 1000)]
    pub code: i32,

    #[schema(example = "Invalid token")]
    pub message: String,
}

impl ApiError {
    /// JSON-RPC 에러 코드
    pub fn code(&self) -> i32 {
        match self {
            ApiError::AuthError
            | ApiError::RegisterError
            | ApiError::AccountNotFound
            | ApiError::TokenError
            | ApiError::TokenExpired
            | ApiError::TokenSubjectMissing
            | ApiError::AccessTokenMissing
            | ApiError::RefreshTokenMissing => 1000,
            ApiError::VideoNotExist
            | ApiError::VideoNameEmpty
            | ApiError::NotVideoAuthor
            | ApiError::CommentEmpty => 5000,
            ApiError::AlreadySubscribed
            | ApiError::AlreadyUnsubscribed
            | ApiError::AlreadyWatched
            | ApiError::SubscribeToYourself => 7000,
            ApiError::StorageUnavailable => -32000,
            ApiError::ParseError => -32700,
            ApiError::InvalidRequest => -32600,
            ApiError::MethodNotFound(_) => -32601,
            ApiError::InvalidParams(_) => -32602,
            ApiError::Internal(_) => -32603,
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// 저장소 에러를 클라이언트 에러로 변환
/// Any storage failure that reaches a handler unclassified is reported as unavailable.
/// Duplicate-key failures that carry meaning are mapped explicitly by the services.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "storage operation failed");
        ApiError::StorageUnavailable
    }
}

// src/domains/auth/services/jwt_service.rs
use crate::shared::errors::ApiError;
use crate::domains::auth::models::jwt::{Claims, TokenPair};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// JWT 서비스
/// JWT Service for token generation and verification
///
/// 상태 없는 서비스: 서명 키와 만료 시간만 보관합니다.
/// Stateless apart from its signing key and lifetimes; never touches storage.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtService {
    /// JWT Service 생성
    /// Create JWT Service
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Access/Refresh Token 쌍 발급
    /// Issue an access/refresh token pair for an already validated user
    pub fn create_access_and_refresh_token(&self, user_id: u64) -> Result<TokenPair, ApiError> {
        Ok(TokenPair {
            access_token: self.sign(user_id, self.access_ttl)?,
            refresh_token: self.sign(user_id, self.refresh_ttl)?,
        })
    }

    fn sign(&self, user_id: u64, ttl: Duration) -> Result<String, ApiError> {
        let now = Utc::now();
        let claims = Claims {
            sub: Some(user_id.to_string()),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(format!("Failed to generate token: {}", e)))
    }

    /// 토큰 검증 후 사용자 ID 추출
    /// Verify a token and extract its user id
    ///
    /// 순서: 서명/형식 → 만료 → subject.
    /// Order of checks: signature/shape, then expiry, then subject.
    /// Expiry is compared in UTC on both sides.
    pub fn validate_and_extract_user_id(&self, token: &str) -> Result<u64, ApiError> {
        if token.is_empty() {
            return Err(ApiError::TokenError);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // 만료는 아래에서 직접 비교 (leeway 없이, TokenExpired로 구분)
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| ApiError::TokenError)?
            .claims;

        if claims.exp < Utc::now().timestamp() {
            return Err(ApiError::TokenExpired);
        }

        let sub = match claims.sub.as_deref().map(str::trim) {
            Some(sub) if !sub.is_empty() => sub,
            _ => return Err(ApiError::TokenSubjectMissing),
        };

        sub.parse::<u64>().map_err(|_| ApiError::TokenError)
    }

    /// Refresh Token 해싱 (DB 저장용)
    /// Hash Refresh Token (for database storage)
    pub fn hash_refresh_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

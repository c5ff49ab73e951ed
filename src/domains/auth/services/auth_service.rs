use std::sync::Arc;
use crate::shared::database::UserStore;
use crate::shared::errors::{ApiError, StoreError};
use crate::domains::auth::models::{User, NewUser, RegisterRequest, LoginRequest, TokenPair};
use crate::domains::auth::services::JwtService;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use argon2::password_hash::{rand_core::OsRng, SaltString};

// 인증 서비스
// AuthService: registration, login, token refresh and session resolution
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, jwt_service: JwtService) -> Self {
        Self { users, jwt_service }
    }

    // 회원가입 (비즈니스 로직)
    // 성공 시 토큰 쌍을 발급하고 refresh token 해시를 저장
    pub async fn register(&self, request: RegisterRequest) -> Result<TokenPair, ApiError> {
        let email = request.email.trim();
        let username = request.username.trim();
        if email.is_empty() || username.is_empty() || request.password.is_empty() {
            return Err(ApiError::InvalidParams(
                "email, username and password are required".to_string(),
            ));
        }

        // 1. 이메일/사용자명 중복 확인
        if self.users.get_by_email(email).await?.is_some() {
            tracing::debug!("registration rejected: email taken");
            return Err(ApiError::RegisterError);
        }
        if self.users.get_by_username(username).await?.is_some() {
            tracing::debug!("registration rejected: username taken");
            return Err(ApiError::RegisterError);
        }

        // 2. 비밀번호 해싱
        let password_hash = Self::hash_password(&request.password)?;

        // 3. 사용자 생성 (동시 가입 경합은 유니크 제약이 처리)
        let user = self
            .users
            .create(NewUser {
                email: email.to_string(),
                username: username.to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                StoreError::Duplicate { constraint } => {
                    tracing::info!(%constraint, "registration rejected by unique constraint");
                    ApiError::RegisterError
                }
                other => ApiError::from(other),
            })?;

        // 4. 토큰 발급 (실패 시 방금 만든 사용자 삭제)
        // A user without a stored refresh token must not survive a failed registration.
        match self.issue_tokens(user.id).await {
            Ok(pair) => {
                tracing::info!(user_id = user.id, "user registered");
                Ok(pair)
            }
            Err(err) => {
                if let Err(cleanup) = self.users.delete(user.id).await {
                    tracing::error!(user_id = user.id, error = %cleanup, "failed to remove half-registered user");
                }
                tracing::warn!(user_id = user.id, "registration rolled back: token store failed");
                Err(err)
            }
        }
    }

    // 로그인 (비즈니스 로직)
    //
    // 존재하지 않는 이메일, 틀린 비밀번호, 비활성 계정 모두 AccountNotFound로 응답합니다.
    // Unknown email, wrong password and inactive account all map to AccountNotFound.
    pub async fn login(&self, request: LoginRequest) -> Result<TokenPair, ApiError> {
        let user = self
            .users
            .get_by_email(request.email.trim())
            .await?
            .ok_or(ApiError::AccountNotFound)?;

        if !user.is_active || !Self::verify_password(&request.password, &user.password_hash) {
            tracing::info!(user_id = user.id, "login rejected");
            return Err(ApiError::AccountNotFound);
        }

        self.issue_tokens(user.id).await
    }

    /// Refresh Token 검증 및 새 토큰 쌍 발급 (Rotation)
    /// Verify a refresh token and rotate it for a new pair
    ///
    /// 서명/만료 검증 후 저장된 값과 비교합니다. 불일치 → AuthError.
    /// After signature and expiry checks the token must equal the one on file;
    /// a superseded token fails with `AuthError` even while unexpired.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        // 1. 서명/만료/subject 검증
        let user_id = self.jwt_service.validate_and_extract_user_id(refresh_token)?;

        // 2. 사용자 조회
        let user = self.active_user(user_id).await?;

        // 3. 저장된 토큰과 비교
        let presented_hash = self.jwt_service.hash_refresh_token(refresh_token);
        if user.refresh_token.as_deref() != Some(presented_hash.as_str()) {
            tracing::warn!(user_id, "refresh rejected: token does not match stored value");
            return Err(ApiError::AuthError);
        }

        // 4. 새 토큰 쌍 발급 후 compare-and-swap으로 교체
        let pair = self.jwt_service.create_access_and_refresh_token(user_id)?;
        let new_hash = self.jwt_service.hash_refresh_token(&pair.refresh_token);
        let rotated = self
            .users
            .rotate_refresh_token(user_id, &presented_hash, &new_hash)
            .await?;

        if !rotated {
            // 동시에 다른 요청이 먼저 교체함
            tracing::warn!(user_id, "refresh rejected: token rotated concurrently");
            return Err(ApiError::AuthError);
        }

        Ok(pair)
    }

    /// 로그아웃 - 저장된 Refresh Token 삭제
    /// Logout - clear the stored refresh token
    pub async fn logout(&self, user_id: u64) -> Result<(), ApiError> {
        self.users.set_refresh_token(user_id, None).await?;
        tracing::info!(user_id, "user logged out");
        Ok(())
    }

    /// Access Token으로 사용자 확인
    /// Resolve an access token to an active user
    pub async fn authenticate(&self, access_token: &str) -> Result<User, ApiError> {
        let user_id = self.jwt_service.validate_and_extract_user_id(access_token)?;
        self.active_user(user_id).await
    }

    pub async fn get_user_info(&self, user_id: u64) -> Result<User, ApiError> {
        self.users
            .get_by_id(user_id)
            .await?
            .ok_or(ApiError::AccountNotFound)
    }

    /// 계정 삭제 (관련 데이터 cascade)
    pub async fn delete_account(&self, user_id: u64) -> Result<(), ApiError> {
        if !self.users.delete(user_id).await? {
            return Err(ApiError::AccountNotFound);
        }
        tracing::info!(user_id, "account deleted");
        Ok(())
    }

    // 토큰 발급 + refresh token 해시 저장 (기존 값 덮어쓰기)
    async fn issue_tokens(&self, user_id: u64) -> Result<TokenPair, ApiError> {
        let pair = self.jwt_service.create_access_and_refresh_token(user_id)?;
        let hash = self.jwt_service.hash_refresh_token(&pair.refresh_token);
        self.users.set_refresh_token(user_id, Some(&hash)).await?;
        Ok(pair)
    }

    // 삭제/비활성 계정은 토큰이 유효해도 인증 불가
    async fn active_user(&self, user_id: u64) -> Result<User, ApiError> {
        match self.users.get_by_id(user_id).await? {
            Some(user) if user.is_active => Ok(user),
            _ => Err(ApiError::AccountNotFound),
        }
    }

    fn hash_password(password: &str) -> Result<String, ApiError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))?
            .to_string();

        Ok(password_hash)
    }

    fn verify_password(password: &str, password_hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(password_hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::database::{MemoryStore, Stores};
    use async_trait::async_trait;
    use chrono::Duration;

    const SECRET: &str = "test-secret-key-that-is-long-enough";

    fn setup() -> (AuthService, Stores) {
        let stores = Stores::memory();
        let jwt = JwtService::new(SECRET, Duration::minutes(15), Duration::days(60));
        (AuthService::new(stores.users.clone(), jwt), stores)
    }

    fn alice() -> RegisterRequest {
        RegisterRequest {
            email: "alice@x.com".to_string(),
            username: "alice".to_string(),
            password: "pw123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_login_scenario() {
        let (auth, stores) = setup();

        let pair = auth.register(alice()).await.unwrap();
        assert!(!pair.access_token.is_empty());
        assert!(!pair.refresh_token.is_empty());

        let user = auth.authenticate(&pair.access_token).await.unwrap();
        assert_eq!(user.email, "alice@x.com");
        assert_ne!(user.password_hash, "pw123");

        // refresh token은 해시로 저장
        let stored = stores.users.get_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(
            stored.refresh_token,
            Some(JwtService::new(SECRET, Duration::minutes(15), Duration::days(60)).hash_refresh_token(&pair.refresh_token))
        );

        // 같은 이메일 재가입
        let again = RegisterRequest { username: "alice2".to_string(), ..alice() };
        assert_eq!(auth.register(again).await, Err(ApiError::RegisterError));

        // 같은 사용자명 재가입
        let again = RegisterRequest { email: "other@x.com".to_string(), ..alice() };
        assert_eq!(auth.register(again).await, Err(ApiError::RegisterError));

        // 틀린 비밀번호 → AccountNotFound
        let wrong = LoginRequest { email: "alice@x.com".to_string(), password: "nope".to_string() };
        assert_eq!(auth.login(wrong).await, Err(ApiError::AccountNotFound));

        // 없는 이메일 → AccountNotFound
        let unknown = LoginRequest { email: "bob@x.com".to_string(), password: "pw123".to_string() };
        assert_eq!(auth.login(unknown).await, Err(ApiError::AccountNotFound));

        let ok = LoginRequest { email: "alice@x.com".to_string(), password: "pw123".to_string() };
        assert!(auth.login(ok).await.is_ok());
    }

    // refresh token 저장만 실패하는 저장소
    struct TokenWriteFails {
        inner: MemoryStore,
    }

    #[async_trait]
    impl UserStore for TokenWriteFails {
        async fn get_by_id(&self, id: u64) -> Result<Option<User>, StoreError> {
            self.inner.get_by_id(id).await
        }

        async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
            self.inner.get_by_email(email).await
        }

        async fn get_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
            self.inner.get_by_username(username).await
        }

        async fn create(&self, user: NewUser) -> Result<User, StoreError> {
            self.inner.create(user).await
        }

        async fn set_refresh_token(&self, _id: u64, _token_hash: Option<&str>) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("connection reset".to_string()))
        }

        async fn rotate_refresh_token(
            &self,
            id: u64,
            expected_hash: &str,
            new_hash: &str,
        ) -> Result<bool, StoreError> {
            self.inner.rotate_refresh_token(id, expected_hash, new_hash).await
        }

        async fn delete(&self, id: u64) -> Result<bool, StoreError> {
            self.inner.delete(id).await
        }
    }

    #[tokio::test]
    async fn test_failed_register_leaves_no_user() {
        let users = Arc::new(TokenWriteFails { inner: MemoryStore::new() });
        let jwt = JwtService::new(SECRET, Duration::minutes(15), Duration::days(60));
        let auth = AuthService::new(users.clone(), jwt);

        assert_eq!(auth.register(alice()).await, Err(ApiError::StorageUnavailable));
        assert!(users.get_by_email("alice@x.com").await.unwrap().is_none());
        assert!(users.get_by_username("alice").await.unwrap().is_none());

        // 재시도는 중복이 아니라 같은 저장소 에러
        assert_eq!(auth.register(alice()).await, Err(ApiError::StorageUnavailable));
    }

    #[tokio::test]
    async fn test_register_requires_fields() {
        let (auth, _) = setup();
        let blank = RegisterRequest { username: "  ".to_string(), ..alice() };
        assert!(matches!(auth.register(blank).await, Err(ApiError::InvalidParams(_))));
    }

    #[tokio::test]
    async fn test_login_supersedes_previous_refresh_token() {
        let (auth, _) = setup();
        let first = auth.register(alice()).await.unwrap();

        let login = LoginRequest { email: "alice@x.com".to_string(), password: "pw123".to_string() };
        let second = auth.login(login).await.unwrap();

        assert_eq!(auth.refresh(&first.refresh_token).await, Err(ApiError::AuthError));
        assert!(auth.refresh(&second.refresh_token).await.is_ok());
    }

    #[tokio::test]
    async fn test_refresh_rotates_and_rejects_reuse() {
        let (auth, _) = setup();
        let pair = auth.register(alice()).await.unwrap();

        let rotated = auth.refresh(&pair.refresh_token).await.unwrap();
        assert_ne!(rotated.refresh_token, pair.refresh_token);
        assert!(auth.authenticate(&rotated.access_token).await.is_ok());

        // 이전 refresh token 재사용 불가
        assert_eq!(auth.refresh(&pair.refresh_token).await, Err(ApiError::AuthError));
        // 새 토큰은 한 번 사용 가능
        assert!(auth.refresh(&rotated.refresh_token).await.is_ok());
    }

    #[tokio::test]
    async fn test_refresh_with_valid_but_unknown_token_is_auth_error() {
        let (auth, stores) = setup();
        let pair = auth.register(alice()).await.unwrap();
        let user_id = auth.authenticate(&pair.access_token).await.unwrap().id;

        // 서명/만료는 정상이지만 저장된 값이 아님
        let jwt = JwtService::new(SECRET, Duration::minutes(15), Duration::days(60));
        let forged = jwt.create_access_and_refresh_token(user_id).unwrap();
        assert_eq!(jwt.validate_and_extract_user_id(&forged.refresh_token), Ok(user_id));
        assert_eq!(auth.refresh(&forged.refresh_token).await, Err(ApiError::AuthError));

        // 실패한 refresh는 저장된 값을 바꾸지 않음
        let stored = stores.users.get_by_id(user_id).await.unwrap().unwrap();
        assert_eq!(stored.refresh_token, Some(jwt.hash_refresh_token(&pair.refresh_token)));
    }

    #[tokio::test]
    async fn test_expired_refresh_token_is_token_expired() {
        let stores = Stores::memory();
        let expired_jwt = JwtService::new(SECRET, Duration::minutes(15), Duration::seconds(-5));
        let auth = AuthService::new(stores.users.clone(), expired_jwt);

        let pair = auth.register(alice()).await.unwrap();
        assert_eq!(auth.refresh(&pair.refresh_token).await, Err(ApiError::TokenExpired));
    }

    #[tokio::test]
    async fn test_logout_revokes_refresh_token() {
        let (auth, _) = setup();
        let pair = auth.register(alice()).await.unwrap();
        let user = auth.authenticate(&pair.access_token).await.unwrap();

        auth.logout(user.id).await.unwrap();
        assert_eq!(auth.refresh(&pair.refresh_token).await, Err(ApiError::AuthError));
    }

    #[tokio::test]
    async fn test_deleted_account_cannot_authenticate() {
        let (auth, _) = setup();
        let pair = auth.register(alice()).await.unwrap();
        let user = auth.authenticate(&pair.access_token).await.unwrap();

        auth.delete_account(user.id).await.unwrap();

        assert_eq!(auth.authenticate(&pair.access_token).await, Err(ApiError::AccountNotFound));
        assert_eq!(auth.refresh(&pair.refresh_token).await, Err(ApiError::AccountNotFound));
        assert_eq!(auth.delete_account(user.id).await, Err(ApiError::AccountNotFound));
    }
}

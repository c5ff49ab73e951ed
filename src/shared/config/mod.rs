// Application configuration
// 애플리케이션 설정 (시작 시 한 번 로드, 이후 불변)
use anyhow::{bail, Context, Result};
use chrono::Duration;
use std::collections::HashMap;

/// 최소 JWT secret 길이 (256 bits)
pub const MIN_JWT_SECRET_LEN: usize = 32;

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:3002";
const DEFAULT_ACCESS_TOKEN_TTL_MINUTES: i64 = 15;
const DEFAULT_REFRESH_TOKEN_TTL_DAYS: i64 = 60;
const DEFAULT_LOG_LEVEL: &str = "info";

/// 애플리케이션 설정
/// Process-wide immutable configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JWT 서명 키 (환경 변수에서만 로드)
    /// Signing secret, only ever read from the environment
    pub jwt_secret: String,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
    /// 없으면 인메모리 저장소 사용
    /// None selects the in-memory store
    pub database_url: Option<String>,
    pub server_address: String,
    pub cors_origin: Option<String>,
    pub log_level: String,
    pub log_json: bool,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드 (.env 파일이 있으면 먼저 적용)
    /// Load configuration from the process environment, seeding from `.env` when present
    pub fn from_env() -> Result<Self> {
        // .env 파일은 선택사항
        let _ = dotenvy::dotenv();
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// 주어진 key/value 맵에서 설정 생성
    /// Build configuration from an explicit variable map
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let get = |key: &str| {
            vars.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let jwt_secret = get("JWT_SECRET").context("JWT_SECRET must be set")?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            bail!(
                "JWT_SECRET must be at least {} bytes, got {}",
                MIN_JWT_SECRET_LEN,
                jwt_secret.len()
            );
        }

        let access_minutes = match get("ACCESS_TOKEN_TTL_MINUTES") {
            Some(v) => v
                .parse::<i64>()
                .with_context(|| format!("ACCESS_TOKEN_TTL_MINUTES is not a number: {}", v))?,
            None => DEFAULT_ACCESS_TOKEN_TTL_MINUTES,
        };

        let refresh_days = match get("REFRESH_TOKEN_TTL_DAYS") {
            Some(v) => v
                .parse::<i64>()
                .with_context(|| format!("REFRESH_TOKEN_TTL_DAYS is not a number: {}", v))?,
            None => DEFAULT_REFRESH_TOKEN_TTL_DAYS,
        };

        if access_minutes <= 0 || refresh_days <= 0 {
            bail!("token lifetimes must be positive");
        }

        let log_json = match get("LOG_JSON") {
            Some(v) => matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"),
            None => false,
        };

        Ok(Self {
            jwt_secret,
            access_token_ttl: Duration::minutes(access_minutes),
            refresh_token_ttl: Duration::days(refresh_days),
            database_url: get("DATABASE_URL"),
            server_address: get("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            cors_origin: get("CORS_ORIGIN"),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_json,
        })
    }
}

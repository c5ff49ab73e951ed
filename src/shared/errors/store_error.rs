use thiserror::Error;

/// 저장소 계층 에러
/// Storage boundary errors
///
/// 유니크 제약 위반과 저장소 장애를 구분합니다.
/// Keeps uniqueness violations apart from the store being unreachable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// 유니크 제약 위반
    /// Unique constraint violated
    #[error("Unique constraint violated: {constraint}")]
    Duplicate { constraint: String },

    /// 저장소 연결 실패 또는 기타 DB 에러
    /// Store unreachable or any other backend failure
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// PostgreSQL unique_violation
const PG_UNIQUE_VIOLATION: &str = "23505";

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) {
                return StoreError::Duplicate {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                };
            }
        }
        StoreError::Unavailable(err.to_string())
    }
}

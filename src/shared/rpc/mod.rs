// =====================================================
// JSON-RPC 2.0 envelope
// =====================================================
// 모든 비즈니스 메서드는 POST /api 하나로 들어옵니다.
// 에러도 HTTP 200 + error 객체로 응답합니다.
// =====================================================

use axum::http::HeaderMap;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use crate::shared::errors::{ApiError, ErrorBody};
use crate::shared::middleware::AuthenticatedUser;
use crate::shared::services::AppState;

pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 요청
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = RpcRequest)]
pub struct RpcRequest {
    #[schema(example = "2.0")]
    pub jsonrpc: String,

    /// 요청 ID (응답에 그대로 반환)
    /// Echoed back unchanged in the response. A request without `id`
    /// is still answered, with `"id": null`; notifications get no special path.
    #[serde(default)]
    #[schema(value_type = Object, example = 1)]
    pub id: Value,

    #[schema(example = "login")]
    pub method: String,

    #[serde(default)]
    #[schema(value_type = Object)]
    pub params: Value,
}

/// JSON-RPC 응답 (result 또는 error 중 하나)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = RpcResponse)]
pub struct RpcResponse {
    pub jsonrpc: String,

    #[schema(value_type = Object)]
    pub id: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub result: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl RpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Value, error: &ApiError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(error.to_body()),
        }
    }
}

/// 메서드 호출 컨텍스트 (상태 + 요청 헤더)
/// Everything a method handler needs besides its params
pub struct RpcContext<'a> {
    pub state: &'a AppState,
    pub headers: &'a HeaderMap,
}

impl<'a> RpcContext<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self { state, headers }
    }

    /// `access-token` 헤더로 호출자 확인
    pub async fn caller(&self) -> Result<AuthenticatedUser, ApiError> {
        AuthenticatedUser::from_headers(&self.state.auth_state.auth_service, self.headers).await
    }
}

/// params → 요청 모델 (실패 시 InvalidParams)
pub fn parse_params<T: DeserializeOwned>(params: &Value) -> Result<T, ApiError> {
    T::deserialize(params).map_err(|e| ApiError::InvalidParams(e.to_string()))
}

/// 응답 모델 → result 값
pub fn to_result<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Internal(e.to_string()))
}

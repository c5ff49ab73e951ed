// =====================================================
// JSON-RPC 엔드포인트 (POST /api)
// =====================================================
// 1. body 파싱 (JSON 아님 → ParseError, 형식 오류 → InvalidRequest)
// 2. 메서드 이름으로 도메인 디스패치
// 3. 결과/에러를 JSON-RPC 응답으로 감싸서 HTTP 200 반환
// =====================================================

use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use serde_json::Value;
use crate::domains::{auth, reactions, social, videos};
use crate::shared::errors::ApiError;
use crate::shared::rpc::{RpcContext, RpcRequest, RpcResponse, JSONRPC_VERSION};
use crate::shared::services::AppState;

#[utoipa::path(
    post,
    path = "/api",
    request_body = RpcRequest,
    responses(
        (status = 200, description = "JSON-RPC response carrying either `result` or `error`", body = RpcResponse)
    ),
    security(
        (),
        ("AccessToken" = []),
        ("RefreshToken" = [])
    ),
    tag = "RPC"
)]
pub async fn rpc_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<RpcResponse> {
    let request = match parse_request(&body) {
        Ok(request) => request,
        Err((id, err)) => {
            tracing::warn!(code = err.code(), "rejected malformed rpc request");
            return Json(RpcResponse::failure(id, &err));
        }
    };

    tracing::info!(method = %request.method, id = %request.id, "rpc call");

    let ctx = RpcContext::new(&app_state, &headers);
    match dispatch(&ctx, &request.method, &request.params).await {
        Ok(result) => {
            tracing::info!(method = %request.method, id = %request.id, "rpc ok");
            Json(RpcResponse::success(request.id, result))
        }
        Err(err) => {
            tracing::info!(
                method = %request.method,
                id = %request.id,
                code = err.code(),
                error = %err,
                "rpc error"
            );
            Json(RpcResponse::failure(request.id, &err))
        }
    }
}

/// 메서드 이름 → 도메인 핸들러
pub async fn dispatch(
    ctx: &RpcContext<'_>,
    method: &str,
    params: &Value,
) -> Result<Value, ApiError> {
    if let Some(result) = auth::routes::dispatch(ctx, method, params).await {
        return result;
    }
    if let Some(result) = videos::routes::dispatch(ctx, method, params).await {
        return result;
    }
    if let Some(result) = reactions::routes::dispatch(ctx, method, params).await {
        return result;
    }
    if let Some(result) = social::routes::dispatch(ctx, method, params).await {
        return result;
    }
    Err(ApiError::MethodNotFound(method.to_string()))
}

// 에러 시 응답에 쓸 id도 함께 반환 (읽을 수 있으면 요청 id, 아니면 null)
fn parse_request(body: &[u8]) -> Result<RpcRequest, (Value, ApiError)> {
    let raw: Value = serde_json::from_slice(body).map_err(|_| (Value::Null, ApiError::ParseError))?;
    let id = raw.get("id").cloned().unwrap_or(Value::Null);

    let request: RpcRequest =
        serde_json::from_value(raw).map_err(|_| (id.clone(), ApiError::InvalidRequest))?;
    if request.jsonrpc != JSONRPC_VERSION {
        return Err((id, ApiError::InvalidRequest));
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_errors() {
        let (id, err) = parse_request(b"{not json").unwrap_err();
        assert_eq!((id, err), (Value::Null, ApiError::ParseError));

        let (id, err) = parse_request(br#"{"jsonrpc":"2.0","id":7}"#).unwrap_err();
        assert_eq!((id, err), (serde_json::json!(7), ApiError::InvalidRequest));

        let (_, err) = parse_request(br#"{"jsonrpc":"1.0","id":1,"method":"login"}"#).unwrap_err();
        assert_eq!(err, ApiError::InvalidRequest);
    }

    #[test]
    fn test_params_default_to_null() {
        let request = parse_request(br#"{"jsonrpc":"2.0","id":"a","method":"list_videos"}"#).unwrap();
        assert_eq!(request.method, "list_videos");
        assert_eq!(request.params, Value::Null);
    }
}

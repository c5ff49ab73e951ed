// Auth domain methods
// 인증 도메인 메서드 테이블
use serde_json::Value;
use crate::domains::auth::handlers::auth_handler;
use crate::shared::errors::ApiError;
use crate::shared::rpc::RpcContext;

/// 인증 메서드 디스패치 (모르는 메서드면 None)
pub async fn dispatch(
    ctx: &RpcContext<'_>,
    method: &str,
    params: &Value,
) -> Option<Result<Value, ApiError>> {
    let result = match method {
        "register_user" => auth_handler::register_user(ctx, params).await,
        "login" => auth_handler::login(ctx, params).await,
        "refresh_tokens" => auth_handler::refresh_tokens(ctx, params).await,
        "logout" => auth_handler::logout(ctx, params).await,
        "get_me" => auth_handler::get_me(ctx, params).await,
        "delete_account" => auth_handler::delete_account(ctx, params).await,
        _ => return None,
    };
    Some(result)
}

use serde_json::Value;
use crate::domains::auth::models::{RegisterRequest, LoginRequest, UserResponse, MessageResponse};
use crate::shared::errors::ApiError;
use crate::shared::middleware::require_refresh_token;
use crate::shared::rpc::{parse_params, to_result, RpcContext};

/// register_user{email, username, password} → TokenPair
pub async fn register_user(ctx: &RpcContext<'_>, params: &Value) -> Result<Value, ApiError> {
    let request: RegisterRequest = parse_params(params)?;
    let pair = ctx.state.auth_state.auth_service.register(request).await?;
    to_result(pair)
}

/// login{email, password} → TokenPair
pub async fn login(ctx: &RpcContext<'_>, params: &Value) -> Result<Value, ApiError> {
    let request: LoginRequest = parse_params(params)?;
    let pair = ctx.state.auth_state.auth_service.login(request).await?;
    to_result(pair)
}

/// refresh_tokens (`refresh-token` 헤더) → 새 TokenPair
pub async fn refresh_tokens(ctx: &RpcContext<'_>, _params: &Value) -> Result<Value, ApiError> {
    let refresh_token = require_refresh_token(ctx.headers)?;
    let pair = ctx.state.auth_state.auth_service.refresh(refresh_token).await?;
    to_result(pair)
}

pub async fn logout(ctx: &RpcContext<'_>, _params: &Value) -> Result<Value, ApiError> {
    let caller = ctx.caller().await?;
    ctx.state.auth_state.auth_service.logout(caller.user_id).await?;
    to_result(MessageResponse::new("Logout successful"))
}

pub async fn get_me(ctx: &RpcContext<'_>, _params: &Value) -> Result<Value, ApiError> {
    let caller = ctx.caller().await?;
    to_result(UserResponse::from(caller.user))
}

pub async fn delete_account(ctx: &RpcContext<'_>, _params: &Value) -> Result<Value, ApiError> {
    let caller = ctx.caller().await?;
    ctx.state.auth_state.auth_service.delete_account(caller.user_id).await?;
    to_result(MessageResponse::new("Account deleted"))
}

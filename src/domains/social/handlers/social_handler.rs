use serde_json::Value;
use crate::domains::social::models::{AddCommentRequest, AuthorIdRequest, CountResponse};
use crate::domains::videos::models::{VideoIdRequest, UserIdRequest};
use crate::domains::auth::models::MessageResponse;
use crate::shared::errors::ApiError;
use crate::shared::rpc::{parse_params, to_result, RpcContext};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// 댓글
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn add_comment(ctx: &RpcContext<'_>, params: &Value) -> Result<Value, ApiError> {
    let caller = ctx.caller().await?;
    let request: AddCommentRequest = parse_params(params)?;
    let comment = ctx
        .state
        .social_state
        .comment_service
        .add_comment(caller.user_id, request)
        .await?;
    to_result(comment)
}

pub async fn get_comments(ctx: &RpcContext<'_>, params: &Value) -> Result<Value, ApiError> {
    let request: VideoIdRequest = parse_params(params)?;
    to_result(
        ctx.state
            .social_state
            .comment_service
            .get_comments(request.video_id)
            .await?,
    )
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// 구독
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn subscribe(ctx: &RpcContext<'_>, params: &Value) -> Result<Value, ApiError> {
    let caller = ctx.caller().await?;
    let request: AuthorIdRequest = parse_params(params)?;
    ctx.state
        .social_state
        .subscription_service
        .subscribe(caller.user_id, request.author_id)
        .await?;
    to_result(MessageResponse::new("Subscribed"))
}

pub async fn unsubscribe(ctx: &RpcContext<'_>, params: &Value) -> Result<Value, ApiError> {
    let caller = ctx.caller().await?;
    let request: AuthorIdRequest = parse_params(params)?;
    ctx.state
        .social_state
        .subscription_service
        .unsubscribe(caller.user_id, request.author_id)
        .await?;
    to_result(MessageResponse::new("Unsubscribed"))
}

pub async fn get_subscriptions(ctx: &RpcContext<'_>, _params: &Value) -> Result<Value, ApiError> {
    let caller = ctx.caller().await?;
    to_result(
        ctx.state
            .social_state
            .subscription_service
            .get_subscriptions(caller.user_id)
            .await?,
    )
}

pub async fn get_subscriber_count(ctx: &RpcContext<'_>, params: &Value) -> Result<Value, ApiError> {
    let request: UserIdRequest = parse_params(params)?;
    let count = ctx
        .state
        .social_state
        .subscription_service
        .get_subscriber_count(request.user_id)
        .await?;
    to_result(CountResponse { count })
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// 시청 기록
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn watch_video(ctx: &RpcContext<'_>, params: &Value) -> Result<Value, ApiError> {
    let caller = ctx.caller().await?;
    let request: VideoIdRequest = parse_params(params)?;
    ctx.state
        .social_state
        .view_service
        .watch_video(caller.user_id, request.video_id)
        .await?;
    to_result(MessageResponse::new("View recorded"))
}

pub async fn get_video_views(ctx: &RpcContext<'_>, params: &Value) -> Result<Value, ApiError> {
    let request: VideoIdRequest = parse_params(params)?;
    let count = ctx
        .state
        .social_state
        .view_service
        .get_video_views(request.video_id)
        .await?;
    to_result(CountResponse { count })
}

pub async fn get_view_history(ctx: &RpcContext<'_>, _params: &Value) -> Result<Value, ApiError> {
    let caller = ctx.caller().await?;
    to_result(
        ctx.state
            .social_state
            .view_service
            .get_view_history(caller.user_id)
            .await?,
    )
}

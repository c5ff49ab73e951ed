// Social domain methods (comments, subscriptions, views)
use serde_json::Value;
use crate::domains::social::handlers::social_handler;
use crate::shared::errors::ApiError;
use crate::shared::rpc::RpcContext;

pub async fn dispatch(
    ctx: &RpcContext<'_>,
    method: &str,
    params: &Value,
) -> Option<Result<Value, ApiError>> {
    let result = match method {
        "add_comment" => social_handler::add_comment(ctx, params).await,
        "get_comments" => social_handler::get_comments(ctx, params).await,
        "subscribe" => social_handler::subscribe(ctx, params).await,
        "unsubscribe" => social_handler::unsubscribe(ctx, params).await,
        "get_subscriptions" => social_handler::get_subscriptions(ctx, params).await,
        "get_subscriber_count" => social_handler::get_subscriber_count(ctx, params).await,
        "watch_video" => social_handler::watch_video(ctx, params).await,
        "get_video_views" => social_handler::get_video_views(ctx, params).await,
        "get_view_history" => social_handler::get_view_history(ctx, params).await,
        _ => return None,
    };
    Some(result)
}

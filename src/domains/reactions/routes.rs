// Rating methods
use serde_json::Value;
use crate::domains::reactions::handlers::reaction_handler;
use crate::shared::errors::ApiError;
use crate::shared::rpc::RpcContext;

pub async fn dispatch(
    ctx: &RpcContext<'_>,
    method: &str,
    params: &Value,
) -> Option<Result<Value, ApiError>> {
    let result = match method {
        "rate_video" => reaction_handler::rate_video(ctx, params).await,
        "get_video_likes" => reaction_handler::get_video_likes(ctx, params).await,
        "get_my_reaction" => reaction_handler::get_my_reaction(ctx, params).await,
        _ => return None,
    };
    Some(result)
}

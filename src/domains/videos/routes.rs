// Video domain methods
use serde_json::Value;
use crate::domains::videos::handlers::video_handler;
use crate::shared::errors::ApiError;
use crate::shared::rpc::RpcContext;

pub async fn dispatch(
    ctx: &RpcContext<'_>,
    method: &str,
    params: &Value,
) -> Option<Result<Value, ApiError>> {
    let result = match method {
        "create_video" => video_handler::create_video(ctx, params).await,
        "get_video" => video_handler::get_video(ctx, params).await,
        "list_videos" => video_handler::list_videos(ctx, params).await,
        "list_user_videos" => video_handler::list_user_videos(ctx, params).await,
        "delete_video" => video_handler::delete_video(ctx, params).await,
        _ => return None,
    };
    Some(result)
}

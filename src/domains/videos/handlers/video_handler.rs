use serde_json::Value;
use crate::domains::videos::models::{CreateVideoRequest, VideoIdRequest, UserIdRequest};
use crate::domains::auth::models::MessageResponse;
use crate::shared::errors::ApiError;
use crate::shared::rpc::{parse_params, to_result, RpcContext};

/// create_video{video_name, description?} (access) → Video
pub async fn create_video(ctx: &RpcContext<'_>, params: &Value) -> Result<Value, ApiError> {
    let caller = ctx.caller().await?;
    let request: CreateVideoRequest = parse_params(params)?;
    let video = ctx
        .state
        .video_state
        .video_service
        .create_video(caller.user_id, request)
        .await?;
    to_result(video)
}

pub async fn get_video(ctx: &RpcContext<'_>, params: &Value) -> Result<Value, ApiError> {
    let request: VideoIdRequest = parse_params(params)?;
    to_result(ctx.state.video_state.video_service.get_video(request.video_id).await?)
}

pub async fn list_videos(ctx: &RpcContext<'_>, _params: &Value) -> Result<Value, ApiError> {
    to_result(ctx.state.video_state.video_service.list_videos().await?)
}

pub async fn list_user_videos(ctx: &RpcContext<'_>, params: &Value) -> Result<Value, ApiError> {
    let request: UserIdRequest = parse_params(params)?;
    to_result(
        ctx.state
            .video_state
            .video_service
            .list_user_videos(request.user_id)
            .await?,
    )
}

/// delete_video{video_id} (access, 작성자만)
pub async fn delete_video(ctx: &RpcContext<'_>, params: &Value) -> Result<Value, ApiError> {
    let caller = ctx.caller().await?;
    let request: VideoIdRequest = parse_params(params)?;
    ctx.state
        .video_state
        .video_service
        .delete_video(caller.user_id, request.video_id)
        .await?;
    to_result(MessageResponse::new("Video deleted"))
}

use serde_json::Value;
use crate::domains::reactions::models::RateVideoRequest;
use crate::domains::videos::models::VideoIdRequest;
use crate::shared::errors::ApiError;
use crate::shared::rpc::{parse_params, to_result, RpcContext};

/// rate_video{video_id, reaction} (access) → ReactionState
pub async fn rate_video(ctx: &RpcContext<'_>, params: &Value) -> Result<Value, ApiError> {
    let caller = ctx.caller().await?;
    let request: RateVideoRequest = parse_params(params)?;
    let state = ctx
        .state
        .rating_state
        .reaction_service
        .rate_video(caller.user_id, request.video_id, request.reaction)
        .await?;
    to_result(state)
}

/// get_video_likes{video_id} → {likes, dislikes}
pub async fn get_video_likes(ctx: &RpcContext<'_>, params: &Value) -> Result<Value, ApiError> {
    let request: VideoIdRequest = parse_params(params)?;
    let counts = ctx
        .state
        .rating_state
        .reaction_service
        .get_video_number_of_likes_and_dislikes(request.video_id)
        .await?;
    to_result(counts)
}

/// get_my_reaction{video_id} (access) → "like" | "dislike" | "neutral"
pub async fn get_my_reaction(ctx: &RpcContext<'_>, params: &Value) -> Result<Value, ApiError> {
    let caller = ctx.caller().await?;
    let request: VideoIdRequest = parse_params(params)?;
    let reaction = ctx
        .state
        .rating_state
        .reaction_service
        .get_user_reaction_to_video(caller.user_id, request.video_id)
        .await?;
    to_result(reaction)
}

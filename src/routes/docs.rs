use utoipa::OpenApi;
use crate::domains::auth::models::{RegisterRequest, LoginRequest, TokenPair, UserResponse, MessageResponse};
use crate::domains::videos::models::{Video, CreateVideoRequest, VideoIdRequest, UserIdRequest};
use crate::domains::reactions::models::{Reaction, ReactionState, LikeCounts, RateVideoRequest};
use crate::domains::social::models::{Comment, AddCommentRequest, AuthorIdRequest, CountResponse};
use crate::shared::errors::ErrorBody;
use crate::shared::middleware::{ACCESS_TOKEN_HEADER, REFRESH_TOKEN_HEADER};
use crate::shared::rpc::{RpcRequest, RpcResponse};

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
// 모든 메서드는 POST /api 하나로 들어오므로 params/result 모델은 components로만 노출
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::rpc::rpc_handler,
        crate::routes::health
    ),
    components(schemas(
        RpcRequest,
        RpcResponse,
        ErrorBody,
        RegisterRequest,
        LoginRequest,
        TokenPair,
        UserResponse,
        MessageResponse,
        Video,
        CreateVideoRequest,
        VideoIdRequest,
        UserIdRequest,
        Reaction,
        ReactionState,
        LikeCounts,
        RateVideoRequest,
        Comment,
        AddCommentRequest,
        AuthorIdRequest,
        CountResponse
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "RPC", description = "JSON-RPC 2.0 endpoint for every business method"),
        (name = "Health", description = "Liveness probe")
    ),
    info(
        title = "JustWatch API Server",
        description = "Video sharing backend: accounts, videos, ratings, comments, subscriptions and view history",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

// Security scheme 정의: Swagger UI에서 "Authorize" 버튼 추가
// 토큰은 Authorization이 아닌 전용 헤더로 전달
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};

        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "AccessToken",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ACCESS_TOKEN_HEADER))),
            );
            components.add_security_scheme(
                "RefreshToken",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(REFRESH_TOKEN_HEADER))),
            );
        }
    }
}

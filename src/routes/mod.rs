// Routes module: 라우팅 설정
// 역할: JSON-RPC 엔드포인트, 헬스체크, Swagger 문서를 하나의 Router로 조합
// Routes module: combines the RPC endpoint, health check and API docs

pub mod docs;
pub mod rpc;

use axum::{routing::{get, post}, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::shared::services::AppState;
use docs::ApiDoc;

/// Create main router
/// 메인 라우터 생성
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api", post(rpc::rpc_handler))
        .route("/health", get(health))
}

/// 상태가 주입된 전체 애플리케이션 (CORS는 main에서 설정에 따라 추가)
/// Full application with docs, request tracing and state attached
pub fn create_app(app_state: AppState) -> Router {
    Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is up")
    ),
    tag = "Health"
)]
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 인메모리 저장소 위에 전체 Router를 구성하고
// JSON-RPC 요청을 oneshot으로 보냅니다 (서버/DB 불필요).
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let app = setup_app();
//     let alice = register(&app, "alice").await;
//     let me = call_ok(&app, "get_me", json!({}), &[(ACCESS_TOKEN_HEADER, &alice.access_token)]).await;
// }
// ```
// =====================================================
#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Duration;
use serde_json::{json, Value};
use tower::ServiceExt;

use justwatch_api::domains::auth::models::TokenPair;
use justwatch_api::domains::auth::services::JwtService;
use justwatch_api::routes::create_app;
use justwatch_api::shared::database::Stores;
use justwatch_api::shared::services::AppState;

pub use justwatch_api::shared::middleware::{ACCESS_TOKEN_HEADER, REFRESH_TOKEN_HEADER};

pub const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789";
pub const TEST_PASSWORD: &str = "pw123";

/// 인메모리 저장소 기반 앱 생성
pub fn setup_app() -> Router {
    setup_app_with_ttl(Duration::minutes(15), Duration::days(60))
}

/// 토큰 수명을 지정해서 앱 생성 (만료 테스트용)
pub fn setup_app_with_ttl(access_ttl: Duration, refresh_ttl: Duration) -> Router {
    let stores = Stores::memory();
    let jwt_service = JwtService::new(TEST_JWT_SECRET, access_ttl, refresh_ttl);
    create_app(AppState::new(&stores, jwt_service))
}

/// 임의 경로로 GET
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

/// 원시 body로 POST /api
pub async fn post_raw(app: &Router, body: String, headers: &[(&str, &str)]) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api")
        .header("content-type", "application/json");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::from(body)).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// JSON-RPC 호출 후 전체 응답 반환
pub async fn call(app: &Router, method: &str, params: Value, headers: &[(&str, &str)]) -> Value {
    let body = json!({ "jsonrpc": "2.0", "id": 1, "method": method, "params": params });
    let (status, response) = post_raw(app, body.to_string(), headers).await;
    assert_eq!(status, StatusCode::OK);
    response
}

/// 성공 응답의 result (에러면 패닉)
pub async fn call_ok(app: &Router, method: &str, params: Value, headers: &[(&str, &str)]) -> Value {
    let response = call(app, method, params, headers).await;
    assert!(response.get("error").is_none(), "{} failed: {}", method, response);
    response["result"].clone()
}

/// 에러 응답의 (code, message)
pub async fn call_err(app: &Router, method: &str, params: Value, headers: &[(&str, &str)]) -> (i64, String) {
    let response = call(app, method, params, headers).await;
    assert!(response.get("result").is_none(), "{} unexpectedly succeeded: {}", method, response);
    (
        response["error"]["code"].as_i64().unwrap(),
        response["error"]["message"].as_str().unwrap().to_string(),
    )
}

/// `<name>@x.com` / `<name>` / TEST_PASSWORD 로 회원가입
pub async fn register(app: &Router, name: &str) -> TokenPair {
    let result = call_ok(
        app,
        "register_user",
        json!({ "email": format!("{}@x.com", name), "username": name, "password": TEST_PASSWORD }),
        &[],
    )
    .await;
    serde_json::from_value(result).unwrap()
}

/// 회원가입 후 (토큰, 사용자 ID)
pub async fn register_with_id(app: &Router, name: &str) -> (TokenPair, u64) {
    let tokens = register(app, name).await;
    let me = call_ok(app, "get_me", json!({}), &[(ACCESS_TOKEN_HEADER, &tokens.access_token)]).await;
    (tokens, me["id"].as_u64().unwrap())
}

/// 동영상 생성 후 ID
pub async fn create_video(app: &Router, tokens: &TokenPair, name: &str) -> u64 {
    let video = call_ok(
        app,
        "create_video",
        json!({ "video_name": name }),
        &[(ACCESS_TOKEN_HEADER, &tokens.access_token)],
    )
    .await;
    video["id"].as_u64().unwrap()
}

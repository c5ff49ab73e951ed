use anyhow::{Context, Result};
use axum::http::{HeaderName, HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use justwatch_api::domains::auth::services::JwtService;
use justwatch_api::routes::create_app;
use justwatch_api::shared::config::AppConfig;
use justwatch_api::shared::database::{Database, Stores};
use justwatch_api::shared::logging;
use justwatch_api::shared::middleware::{ACCESS_TOKEN_HEADER, REFRESH_TOKEN_HEADER};
use justwatch_api::shared::services::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // 설정 로드 (.env → 환경 변수)
    let config = AppConfig::from_env()?;
    logging::init(&config.log_level, config.log_json)?;

    // DB 연결: DATABASE_URL이 없으면 인메모리 저장소
    let stores = match &config.database_url {
        Some(db_url) => {
            let db = Database::connect(db_url).await?;
            db.run_migrations().await?;
            tracing::info!("Database: PostgreSQL");
            Stores::postgres(&db)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store (data is lost on restart)");
            Stores::memory()
        }
    };

    // AppState 생성 (모든 Service 초기화)
    let jwt_service = JwtService::new(
        &config.jwt_secret,
        config.access_token_ttl,
        config.refresh_token_ttl,
    );
    let app_state = AppState::new(&stores, jwt_service);

    let mut app = create_app(app_state);

    // CORS 설정 (CORS_ORIGIN이 있을 때만)
    if let Some(origin) = &config.cors_origin {
        let origin = origin
            .parse::<HeaderValue>()
            .with_context(|| format!("invalid CORS_ORIGIN: {}", origin))?;
        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
                HeaderName::from_static(ACCESS_TOKEN_HEADER),
                HeaderName::from_static(REFRESH_TOKEN_HEADER),
            ])
            .allow_credentials(true);
        app = app.layer(cors);
    }

    // 서버 시작
    let listener = TcpListener::bind(&config.server_address)
        .await
        .with_context(|| format!("failed to bind {}", config.server_address))?;

    tracing::info!(address = %config.server_address, "Server running");
    tracing::info!("Swagger UI available at /docs");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use pflegequiz_backend::{
    config::{get_config, init_config},
    middleware, routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let app_state = AppState::new();
    info!(
        "Knowledge base loaded: {} entries across {} topics",
        app_state.knowledge.len(),
        app_state.knowledge.topics().len()
    );
    if config.openai_api_key.is_none() && config.anthropic_api_key.is_none() {
        tracing::warn!("No chat API key configured, /api/chat will answer 503");
    }

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let public_api = Router::new()
        .route("/api/quiz/generate", post(routes::quiz::generate_quiz))
        .route("/api/quiz/topics", get(routes::quiz::list_topics))
        .route(
            "/api/knowledge/search",
            get(routes::knowledge::search_knowledge),
        )
        .route("/api/chat", post(routes::chat::chat))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::RateLimiter::per_second(config.public_rps),
            middleware::rate_limit::rps_middleware,
        ));

    let app = base_routes
        .merge(public_api)
        .with_state(app_state)
        .layer(middleware::cors::permissive_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

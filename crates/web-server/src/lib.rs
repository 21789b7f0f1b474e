use analytics::AnalyticsEngine;
use axum::{routing::get, Router};
use configuration::{AnalyticsSettings, Config};
use database::{InventoryStore, ToolRepository};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod telemetry;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub store: Arc<dyn InventoryStore>,
    pub engine: AnalyticsEngine,
    /// Defaults for report parameters the caller leaves out.
    pub analytics: AnalyticsSettings,
}

impl AppState {
    pub fn new(store: Arc<dyn InventoryStore>, analytics: AnalyticsSettings) -> Self {
        Self {
            store,
            engine: AnalyticsEngine::new(),
            analytics,
        }
    }
}

/// Builds the router with every route, CORS and request tracing.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/tools", get(handlers::list_tools))
        .route("/api/tools/:id", get(handlers::tool_detail))
        .route("/api/analytics/department-costs", get(handlers::department_costs))
        .route("/api/analytics/expensive-tools", get(handlers::expensive_tools))
        .route("/api/analytics/tools-by-category", get(handlers::tools_by_category))
        .route("/api/analytics/low-usage-tools", get(handlers::low_usage_tools))
        .route("/api/analytics/vendor-summary", get(handlers::vendor_summary))
        .with_state(state)
        .layer(cors)
        // Logs every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Serves the API from the given store until the process is stopped.
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);
    axum::serve(listener, app(state)).await?;
    Ok(())
}

/// Connects to PostgreSQL, applies migrations and serves the API.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let db_pool = database::connect(&config.database).await?;
    database::run_migrations(&db_pool).await?;
    let store: Arc<dyn InventoryStore> = Arc::new(ToolRepository::new(db_pool));

    let state = Arc::new(AppState::new(store, config.analytics.clone()));
    serve(config.server.addr(), state).await
}

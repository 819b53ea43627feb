use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::system::{self, state::AppState};

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARDS
        // ========================================
        // D400 Insurance Analytics Dashboard
        .route(
            "/api/d400/meta",
            get(handlers::d400_insurance_analytics::get_meta),
        )
        .route(
            "/api/d400/dashboard",
            post(handlers::d400_insurance_analytics::get_dashboard),
        )
        .route(
            "/api/d400/table",
            post(handlers::d400_insurance_analytics::get_table),
        )
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors)
}

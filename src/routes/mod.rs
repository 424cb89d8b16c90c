// src/routes/mod.rs
pub mod trip;

use crate::state::SharedState;
use axum::{
    Router,
    extract::Request,
    http::{Method, StatusCode, header},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use trip::{generate_trip_handler, get_metrics_handler, trip_report_handler};

pub fn create_router() -> Router<SharedState> {
    let admin_routes = Router::new()
        .route("/metrics", get(get_metrics_handler))
        .layer(middleware::from_fn(auth_middleware));

    // Browser preflight requests get an empty 200 with POST advertised.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/generate-trip", post(generate_trip_handler))
        .route("/api/trip-report", post(trip_report_handler))
        .nest("/admin", admin_routes)
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn auth_middleware(req: Request, next: Next) -> Result<Response, StatusCode> {
    // API Key check. The admin surface stays locked until a key is configured.
    let expected = match std::env::var("ADMIN_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => return Err(StatusCode::UNAUTHORIZED),
    };
    match req.headers().get("x-admin-key") {
        Some(val) if val == expected.as_str() => Ok(next.run(req).await),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

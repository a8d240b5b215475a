use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::districts::store::DistrictStore;

pub mod districts;

/// Shared handler state: the district store behind its trait, so tests and
/// future backends can swap the implementation.
#[derive(Clone)]
pub struct ServerState {
    pub districts: Arc<dyn DistrictStore>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: static map UI assets, health check,
/// and the districts API.
pub fn build_router(state: ServerState, frontend_dir: &str, cors: CorsLayer) -> Router {
    let index = format!("{frontend_dir}/index.html");
    let static_dir = ServeDir::new(frontend_dir).fallback(ServeFile::new(index));

    let public = Router::new()
        .nest_service("/", static_dir)
        .route("/health", get(health));

    let api = Router::new().route(
        "/api/districts",
        get(districts::list_districts).post(districts::create_district),
    );

    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

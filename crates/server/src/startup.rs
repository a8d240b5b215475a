use std::{env, net::SocketAddr, path::PathBuf};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use service::{file::district_store::FileDistrictStore, runtime};

fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load the application config once. When no config file is available,
/// fall back to defaults with env var overrides.
fn load_config() -> configs::AppConfig {
    let mut cfg = configs::load_default().unwrap_or_else(|_| {
        let mut cfg = configs::AppConfig::default();
        if let Ok(host) = env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg
    });
    cfg.storage.normalize_from_env();
    cfg
}

fn bind_addr(server: &configs::ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

/// Public entry: build the app and run the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config();
    let districts_file = PathBuf::from(&cfg.storage.districts_file);
    let frontend_dir = &cfg.storage.frontend_dir;
    runtime::ensure_env(frontend_dir, &districts_file).await?;

    let districts = FileDistrictStore::new(&districts_file).await?;
    let state = ServerState { districts };

    let cors = build_cors();
    let app: Router = routes::build_router(state, frontend_dir, cors);

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, districts_file = %districts_file.display(), "starting district map server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use models::district::{District, NewDistrict};
use server::routes::{self, ServerState};
use service::districts::store::DistrictStore;
use service::errors::ServiceError;
use service::file::district_store::FileDistrictStore;

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
}

async fn start_server_with(districts: Arc<dyn DistrictStore>) -> anyhow::Result<TestApp> {
    let state = ServerState { districts };
    let app: Router = routes::build_router(state, "frontend", cors());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

/// Spin up the real router over an isolated temp data file per test.
async fn start_server() -> anyhow::Result<TestApp> {
    let districts_file = std::env::temp_dir()
        .join(format!("e2e-districts-{}", Uuid::new_v4()))
        .join("districts.json");
    let store = FileDistrictStore::new(districts_file).await?;
    start_server_with(store).await
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn centro_body() -> serde_json::Value {
    json!({
        "nombre": "Centro",
        "coordenadas": [
            {"lat": -34.6, "lng": -58.4},
            {"lat": -34.61, "lng": -58.38},
            {"lat": -34.59, "lng": -58.39}
        ]
    })
}

#[tokio::test]
async fn health_responds_ok() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn list_is_empty_before_any_create() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/api/districts", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body = res.json::<Vec<District>>().await?;
    assert!(body.is_empty());
    Ok(())
}

#[tokio::test]
async fn create_centro_returns_full_district() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/api/districts", app.base_url))
        .json(&centro_body())
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);

    let created = res.json::<serde_json::Value>().await?;
    assert_eq!(created["nombre"], "Centro");
    let coords = created["coordenadas"].as_array().expect("array");
    assert_eq!(coords.len(), 3);
    assert_eq!(coords[0]["lat"], -34.6);
    assert_eq!(coords[0]["lng"], -58.4);

    let id = created["id"].as_str().expect("id string");
    assert!(!id.is_empty());
    let color = created["color"].as_str().expect("color string");
    assert_eq!(color.len(), 7);
    assert!(color.starts_with('#'));
    assert!(color[1..].chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    Ok(())
}

#[tokio::test]
async fn list_returns_creations_in_order_with_distinct_ids() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let mut ids = Vec::new();
    for nombre in ["Norte", "Sur", "Este"] {
        let res = c
            .post(format!("{}/api/districts", app.base_url))
            .json(&json!({"nombre": nombre, "coordenadas": [{"lat": 1.0, "lng": 2.0}]}))
            .send()
            .await?;
        assert_eq!(res.status(), reqwest::StatusCode::CREATED);
        ids.push(res.json::<District>().await?.id);
    }
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_ne!(ids[0], ids[2]);

    let listed = c
        .get(format!("{}/api/districts", app.base_url))
        .send()
        .await?
        .json::<Vec<District>>()
        .await?;
    assert_eq!(
        listed.iter().map(|d| d.nombre.as_str()).collect::<Vec<_>>(),
        vec!["Norte", "Sur", "Este"]
    );
    assert_eq!(listed.iter().map(|d| d.id.as_str()).collect::<Vec<_>>(), ids);

    // Idempotent read: a second list without writes is identical.
    let again = c
        .get(format!("{}/api/districts", app.base_url))
        .send()
        .await?
        .json::<Vec<District>>()
        .await?;
    assert_eq!(again, listed);
    Ok(())
}

#[tokio::test]
async fn missing_nombre_is_rejected_with_exact_message() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/api/districts", app.base_url))
        .json(&json!({"coordenadas": [{"lat": 1, "lng": 2}]}))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Nombre y coordenadas son requeridos");
    Ok(())
}

#[tokio::test]
async fn non_array_coordenadas_is_rejected_as_missing() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/api/districts", app.base_url))
        .json(&json!({"nombre": "A", "coordenadas": "not-an-array"}))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Nombre y coordenadas son requeridos");
    Ok(())
}

#[tokio::test]
async fn non_numeric_coordinate_is_rejected_with_exact_message() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/api/districts", app.base_url))
        .json(&json!({"nombre": "A", "coordenadas": [{"lat": "x", "lng": 2}]}))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Las coordenadas deben tener formato { lat: number, lng: number }");

    // Nothing was persisted by the rejected request.
    let listed = client()
        .get(format!("{}/api/districts", app.base_url))
        .send()
        .await?
        .json::<Vec<District>>()
        .await?;
    assert!(listed.is_empty());
    Ok(())
}

#[tokio::test]
async fn unparsable_body_is_a_generic_create_error() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/api/districts", app.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Error al crear el distrito");
    Ok(())
}

/// Store double that always fails, to exercise the 500 contract.
struct BrokenStore;

#[async_trait]
impl DistrictStore for BrokenStore {
    async fn list(&self) -> Result<Vec<District>, ServiceError> {
        Err(ServiceError::Storage("disk on fire".into()))
    }
    async fn create(&self, _input: NewDistrict) -> Result<District, ServiceError> {
        Err(ServiceError::Storage("disk on fire".into()))
    }
}

#[tokio::test]
async fn storage_failures_map_to_generic_500s() -> anyhow::Result<()> {
    let app = start_server_with(Arc::new(BrokenStore)).await?;
    let c = client();

    let res = c.get(format!("{}/api/districts", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Error al obtener los distritos");

    let res = c
        .post(format!("{}/api/districts", app.base_url))
        .json(&centro_body())
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Error al crear el distrito");
    Ok(())
}

#[tokio::test]
async fn persisted_file_is_a_pretty_json_array() -> anyhow::Result<()> {
    let districts_file = std::env::temp_dir()
        .join(format!("e2e-districts-{}", Uuid::new_v4()))
        .join("districts.json");
    let store = FileDistrictStore::new(&districts_file).await?;
    let app = start_server_with(store).await?;

    let res = client()
        .post(format!("{}/api/districts", app.base_url))
        .json(&centro_body())
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);

    let raw = tokio::fs::read_to_string(&districts_file).await?;
    assert!(raw.trim_start().starts_with('['));
    assert!(raw.contains('\n'));
    let parsed: Vec<District> = serde_json::from_str(&raw)?;
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].nombre, "Centro");
    Ok(())
}

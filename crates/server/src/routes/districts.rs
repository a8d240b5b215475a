use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use models::district::{District, NewDistrict};

use crate::errors::ApiError;
use crate::routes::ServerState;

/// GET /api/districts — the whole collection in creation order.
/// A missing backing file is an empty collection, not a failure.
pub async fn list_districts(
    State(state): State<ServerState>,
) -> Result<Json<Vec<District>>, ApiError> {
    let districts = state.districts.list().await.map_err(ApiError::List)?;
    Ok(Json(districts))
}

/// POST /api/districts — validate the payload shape, mint id and color,
/// append, and echo the stored district.
///
/// The body is parsed by hand rather than through `Json<T>` extraction so
/// the two validation failures keep their exact client messages, and an
/// unparsable body falls through to the generic create error like any other
/// unexpected failure.
pub async fn create_district(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<(StatusCode, Json<District>), ApiError> {
    let payload: Value =
        serde_json::from_slice(&body).map_err(|e| ApiError::Create(anyhow::Error::new(e)))?;
    let input = NewDistrict::from_payload(&payload)?;
    let district = state
        .districts
        .create(input)
        .await
        .map_err(|e| ApiError::Create(anyhow::Error::new(e)))?;
    Ok((StatusCode::CREATED, Json(district)))
}

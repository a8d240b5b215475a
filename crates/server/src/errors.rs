use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use models::errors::ModelError;
use service::errors::ServiceError;

/// API-facing error. The display string is exactly what the client sees in
/// the `error` field; server-side causes are logged here and never leaked.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Invalid(#[from] ModelError),
    #[error("Error al obtener los distritos")]
    List(#[source] ServiceError),
    #[error("Error al crear el distrito")]
    Create(#[source] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Invalid(_) => StatusCode::BAD_REQUEST,
            ApiError::List(_) | ApiError::Create(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            match &self {
                ApiError::List(cause) => error!(error = %cause, "listing districts failed"),
                ApiError::Create(cause) => error!(error = %cause, "creating district failed"),
                ApiError::Invalid(_) => {}
            }
        }
        let msg = self.to_string();
        (status, Json(serde_json::json!({ "error": msg }))).into_response()
    }
}

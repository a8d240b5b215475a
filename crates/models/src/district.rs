use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ModelError;

/// One polygon vertex. Latitude/longitude ranges are not enforced.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// A named polygon region with an assigned display color.
///
/// Field names match the persisted JSON and the wire format consumed by the
/// map UI.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct District {
    pub id: String,
    pub nombre: String,
    pub color: String,
    pub coordenadas: Vec<Coordinate>,
}

/// Validated creation input: what the caller supplies, before the server
/// assigns `id` and `color`.
#[derive(Clone, Debug, PartialEq)]
pub struct NewDistrict {
    pub nombre: String,
    pub coordenadas: Vec<Coordinate>,
}

impl NewDistrict {
    /// Shape-check a raw request payload.
    ///
    /// `nombre` must be a non-empty string and `coordenadas` an actual JSON
    /// array, otherwise the whole request is rejected with
    /// [`ModelError::MissingFields`]. Every element must carry numeric
    /// `lat` and `lng`; a single malformed element rejects everything with
    /// [`ModelError::InvalidCoordinates`]. No range or polygon checks
    /// beyond that.
    pub fn from_payload(body: &Value) -> Result<Self, ModelError> {
        let nombre = body
            .get("nombre")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .filter(|n| !n.is_empty())
            .ok_or(ModelError::MissingFields)?;
        let raw = body
            .get("coordenadas")
            .and_then(Value::as_array)
            .ok_or(ModelError::MissingFields)?;

        let mut coordenadas = Vec::with_capacity(raw.len());
        for item in raw {
            let lat = item.get("lat").and_then(Value::as_f64);
            let lng = item.get("lng").and_then(Value::as_f64);
            match (lat, lng) {
                (Some(lat), Some(lng)) => coordenadas.push(Coordinate { lat, lng }),
                _ => return Err(ModelError::InvalidCoordinates),
            }
        }

        Ok(Self { nombre, coordenadas })
    }
}

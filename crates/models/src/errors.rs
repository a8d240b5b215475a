use thiserror::Error;

/// Validation failures for district payloads.
///
/// Display strings double as the user-facing API messages, so they stay in
/// the UI language.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Nombre y coordenadas son requeridos")]
    MissingFields,
    #[error("Las coordenadas deben tener formato {{ lat: number, lng: number }}")]
    InvalidCoordinates,
}

use thiserror::Error;

/// Failures the storage layer can produce. Payload validation happens in
/// `models` before anything reaches a store, so reading or writing the
/// backing file is the only thing left to go wrong here.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }
}

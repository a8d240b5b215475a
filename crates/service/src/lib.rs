//! Storage layer for the district map.
//! - Owns the on-disk JSON representation of the district collection.
//! - Exposes a store trait so the API layer never touches files directly.
//! - Keeps id/color generation pluggable for deterministic tests.

pub mod districts;
pub mod errors;
pub mod file;
pub mod runtime;
pub mod storage;

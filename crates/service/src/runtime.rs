//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

use std::path::Path;

/// Ensure the frontend directory and the districts file's parent exist.
pub async fn ensure_env(frontend_dir: &str, districts_file: &Path) -> anyhow::Result<()> {
    common::env::ensure_env(frontend_dir, districts_file).await
}

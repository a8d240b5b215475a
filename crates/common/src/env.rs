//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected files and directories exist at startup.

use std::path::Path;

use tracing::warn;

/// Ensure the runtime layout is usable before serving requests.
///
/// The frontend directory is optional (the map UI may be deployed
/// elsewhere), so a missing one only warns. The parent directory of the
/// districts file must exist for writes to succeed, so it is created.
pub async fn ensure_env(frontend_dir: &str, districts_file: &Path) -> anyhow::Result<()> {
    if tokio::fs::metadata(frontend_dir).await.is_err() {
        warn!(%frontend_dir, "frontend assets directory not found; static assets may 404");
    }
    if let Some(parent) = districts_file.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

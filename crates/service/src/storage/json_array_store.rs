use std::{marker::PhantomData, path::PathBuf, sync::Arc};

use tokio::{fs, sync::RwLock};
use tracing::warn;

use crate::errors::ServiceError;

/// Generic JSON file-backed ordered collection.
///
/// Persists a `Vec<T>` as a pretty-printed JSON array in a single file.
/// The file is the source of truth: every operation re-reads it, and the
/// lock serializes read-modify-write cycles within the process so two
/// concurrent appends cannot clobber each other. There is no atomic
/// rename; a crash mid-write can truncate the file.
pub struct JsonArrayStore<T> {
    file_path: PathBuf,
    lock: RwLock<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonArrayStore<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    /// Initialize the store for a path. The file itself is created lazily
    /// on first write; a missing file reads as an empty collection.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(ServiceError::storage)?;
            }
        }
        Ok(Arc::new(Self { file_path, lock: RwLock::new(()), _marker: PhantomData }))
    }

    /// Read the whole collection.
    ///
    /// A missing file means "no data yet" and yields an empty vec. An
    /// unreadable file or invalid JSON is reported as a storage error
    /// rather than silently masked as empty, so callers cannot overwrite a
    /// file whose contents they failed to load.
    pub async fn read_all(&self) -> Result<Vec<T>, ServiceError> {
        let _guard = self.lock.read().await;
        self.load().await
    }

    /// Append one item: read, push, rewrite the whole file under the
    /// write lock.
    pub async fn append_one(&self, item: T) -> Result<(), ServiceError> {
        let _guard = self.lock.write().await;
        let mut items = self.load().await?;
        items.push(item);
        self.save(&items).await
    }

    /// Overwrite the file with the given collection.
    pub async fn write_all(&self, items: &[T]) -> Result<(), ServiceError> {
        let _guard = self.lock.write().await;
        self.save(items).await
    }

    async fn load(&self) -> Result<Vec<T>, ServiceError> {
        match fs::read(&self.file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                warn!(path = %self.file_path.display(), error = %e, "backing file is not a valid collection");
                ServiceError::storage(e)
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "cannot read backing file");
                Err(ServiceError::storage(e))
            }
        }
    }

    async fn save(&self, items: &[T]) -> Result<(), ServiceError> {
        // Pretty-printed so the file stays human-diffable.
        let data = serde_json::to_vec_pretty(items).map_err(ServiceError::storage)?;
        fs::write(&self.file_path, data).await.map_err(ServiceError::storage)
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use models::district::{District, NewDistrict};

use crate::districts::identity::{IdentityGen, RandomIdentityGen};
use crate::districts::store::DistrictStore;
use crate::errors::ServiceError;
use crate::storage::json_array_store::JsonArrayStore;

/// File-backed district store: the whole collection lives as one
/// pretty-printed JSON array on disk.
pub struct FileDistrictStore {
    store: Arc<JsonArrayStore<District>>,
    identity: Arc<dyn IdentityGen>,
}

impl FileDistrictStore {
    /// Open the store at the given path with the production id/color
    /// generator.
    pub async fn new<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        Self::with_identity(path, Arc::new(RandomIdentityGen)).await
    }

    /// Open the store with an injected identity generator. Used by tests
    /// that need deterministic ids and colors.
    pub async fn with_identity<P: Into<std::path::PathBuf>>(
        path: P,
        identity: Arc<dyn IdentityGen>,
    ) -> Result<Arc<Self>, ServiceError> {
        let store = JsonArrayStore::<District>::new(path).await?;
        Ok(Arc::new(Self { store, identity }))
    }
}

#[async_trait]
impl DistrictStore for FileDistrictStore {
    async fn list(&self) -> Result<Vec<District>, ServiceError> {
        self.store.read_all().await
    }

    async fn create(&self, input: NewDistrict) -> Result<District, ServiceError> {
        let district = District {
            id: self.identity.district_id(),
            nombre: input.nombre,
            color: self.identity.district_color(),
            coordenadas: input.coordenadas,
        };
        self.store.append_one(district.clone()).await?;
        Ok(district)
    }
}

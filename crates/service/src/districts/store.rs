use async_trait::async_trait;

use models::district::{District, NewDistrict};

use crate::errors::ServiceError;

/// Trait abstraction for district persistence.
/// Implementations can be file-backed today or an embedded database later
/// without the API layer changing.
#[async_trait]
pub trait DistrictStore: Send + Sync {
    /// Full collection in creation order. An absent backing file is an
    /// empty collection, not an error.
    async fn list(&self) -> Result<Vec<District>, ServiceError>;

    /// Mint id and color for the validated input, append it, and return
    /// the stored district.
    async fn create(&self, input: NewDistrict) -> Result<District, ServiceError>;
}

//! Persistence abstraction.
//!
//! Lets the handler run against the in-memory store, a database, or a test
//! double without changing request logic.

use async_trait::async_trait;

use crate::{NewResource, Resource, ResourceId, ResourcePatch, StoreError};

/// Persistence collaborator consumed by [`ResourceHandler`](crate::ResourceHandler).
///
/// Implementations must be `Send + Sync` so one instance can serve concurrent
/// requests, and must serialize mutations against reads so callers never
/// observe a half-applied write.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Persist a new resource, assigning its id and creation time.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the write cannot be performed.
    async fn insert(&self, new: NewResource) -> Result<Resource, StoreError>;

    /// Return resources whose name contains `name_contains` (all when `None`),
    /// newest first with ties broken by descending id.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the read cannot be performed.
    async fn find_many(&self, name_contains: Option<&str>) -> Result<Vec<Resource>, StoreError>;

    /// Look up a single resource.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the read cannot be performed. A missing id is
    /// `Ok(None)`, not an error.
    async fn find_by_id(&self, id: ResourceId) -> Result<Option<Resource>, StoreError>;

    /// Apply `patch` to an existing resource and return the result.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the write cannot be performed. A missing id is
    /// `Ok(None)`.
    async fn update_by_id(
        &self,
        id: ResourceId,
        patch: ResourcePatch,
    ) -> Result<Option<Resource>, StoreError>;

    /// Remove a resource. Returns `true` if a record was affected.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the write cannot be performed.
    async fn delete_by_id(&self, id: ResourceId) -> Result<bool, StoreError>;
}

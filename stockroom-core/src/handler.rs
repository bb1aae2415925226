//! Request handler: validates input, issues exactly one store call, and
//! returns a typed outcome.
//!
//! The handler owns nothing but a shared reference to the store, so a single
//! instance can be cloned into every request task.

use std::fmt;
use std::sync::Arc;

use crate::request::{CreateResource, ListFilter, UpdateResource};
use crate::{HandlerError, NewResource, Resource, ResourceId, ResourcePatch, ResourceStore};

/// Maps create/list/get/update/delete requests onto a [`ResourceStore`].
#[derive(Clone)]
pub struct ResourceHandler {
    store: Arc<dyn ResourceStore>,
}

impl ResourceHandler {
    /// Build a handler over an explicitly constructed store.
    #[must_use]
    pub fn new(store: Arc<dyn ResourceStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a new resource.
    ///
    /// # Errors
    /// Returns [`HandlerError::Validation`] if `name` is missing, null or
    /// blank (the store is not called), or [`HandlerError::Store`] if the
    /// insert fails.
    pub async fn create(&self, input: CreateResource) -> Result<Resource, HandlerError> {
        let new = NewResource::try_from(input)?;
        let resource = self.store.insert(new).await?;
        tracing::info!(id = %resource.id, name = %resource.name, "resource created");
        Ok(resource)
    }

    /// List resources newest first, optionally filtered by name substring.
    ///
    /// # Errors
    /// Returns [`HandlerError::Store`] if the read fails.
    pub async fn list(&self, filter: ListFilter) -> Result<Vec<Resource>, HandlerError> {
        let resources = self.store.find_many(filter.name_contains()).await?;
        tracing::debug!(
            count = resources.len(),
            filter = ?filter.name_contains(),
            "resources listed"
        );
        Ok(resources)
    }

    /// Fetch one resource by its raw id.
    ///
    /// # Errors
    /// Returns [`HandlerError::Validation`] if `raw_id` is not an integer,
    /// [`HandlerError::NotFound`] if no such resource exists, or
    /// [`HandlerError::Store`] if the read fails.
    pub async fn get(&self, raw_id: &str) -> Result<Resource, HandlerError> {
        let id: ResourceId = raw_id.parse()?;
        let resource = self.store.find_by_id(id).await?.ok_or(HandlerError::NotFound(id))?;
        tracing::debug!(%id, "resource fetched");
        Ok(resource)
    }

    /// Apply the fields present in `input` to an existing resource.
    ///
    /// # Errors
    /// Returns [`HandlerError::Validation`] if `raw_id` is not an integer or
    /// the new name is null or blank, [`HandlerError::NotFound`] if no such
    /// resource exists, or [`HandlerError::Store`] if the write fails.
    pub async fn update(
        &self,
        raw_id: &str,
        input: UpdateResource,
    ) -> Result<Resource, HandlerError> {
        let id: ResourceId = raw_id.parse()?;
        let patch = ResourcePatch::try_from(input)?;
        if patch.is_empty() {
            tracing::debug!(%id, "update carries no fields");
        }
        let resource = self
            .store
            .update_by_id(id, patch)
            .await?
            .ok_or(HandlerError::NotFound(id))?;
        tracing::info!(%id, "resource updated");
        Ok(resource)
    }

    /// Remove a resource.
    ///
    /// # Errors
    /// Returns [`HandlerError::Validation`] if `raw_id` is not an integer,
    /// [`HandlerError::Delete`] if the store removed nothing, or
    /// [`HandlerError::Store`] if the write fails.
    pub async fn delete(&self, raw_id: &str) -> Result<(), HandlerError> {
        let id: ResourceId = raw_id.parse()?;
        if !self.store.delete_by_id(id).await? {
            return Err(HandlerError::Delete(id));
        }
        tracing::info!(%id, "resource deleted");
        Ok(())
    }
}

impl fmt::Debug for ResourceHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceHandler").finish_non_exhaustive()
    }
}

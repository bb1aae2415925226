//! Error taxonomy shared by the store and the request handler.

use crate::id::ResourceId;

/// Input rejected before any store call was made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// `name` was absent from a create request.
    #[error("name is required")]
    MissingName,

    /// `name` was explicitly `null`.
    #[error("name must not be null")]
    NullName,

    /// `name` was empty or whitespace-only.
    #[error("name must not be empty")]
    EmptyName,

    /// An id path segment was not a base-10 integer.
    #[error("invalid resource id '{raw}'")]
    InvalidId { raw: String },

    /// The transport could not decode the request body or query.
    #[error("malformed request: {0}")]
    Malformed(String),
}

/// Failures reported by a [`ResourceStore`](crate::store::ResourceStore).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The backing storage could not be reached or is in an unusable state.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The write would violate a storage constraint.
    #[error("constraint violated: {0}")]
    Constraint(String),
}

/// Outcome of a failed handler operation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum HandlerError {
    /// The request was rejected before reaching the store.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No resource with this id exists.
    #[error("resource {0} not found")]
    NotFound(ResourceId),

    /// A delete did not affect any record.
    #[error("delete of resource {0} affected no record")]
    Delete(ResourceId),

    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

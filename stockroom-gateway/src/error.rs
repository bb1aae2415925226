//! Error types for the gateway crate.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use stockroom_core::{HandlerError, ValidationError};

/// The request-level operation a failure occurred in.
///
/// Status codes and client messages depend on the operation as well as the
/// error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Create => "create",
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// A handler failure tagged with the operation that produced it.
///
/// Renders as `{"error": <static message>}`; the underlying cause is logged,
/// never sent to the client.
#[derive(Debug, thiserror::Error)]
#[error("{operation} failed: {source}")]
pub struct ApiError {
    pub operation: Operation,
    #[source]
    pub source: HandlerError,
}

impl ApiError {
    #[must_use]
    pub fn new(operation: Operation, source: HandlerError) -> Self {
        Self { operation, source }
    }

    /// A body, query, or path the transport could not decode.
    #[must_use]
    pub fn malformed(operation: Operation, detail: impl fmt::Display) -> Self {
        Self::new(operation, ValidationError::Malformed(detail.to_string()).into())
    }

    /// Reads go 500 on store failure and Get goes 404 on a missing id;
    /// everything else is a 400.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match (self.operation, &self.source) {
            (Operation::Get, HandlerError::NotFound(_)) => StatusCode::NOT_FOUND,
            (Operation::List | Operation::Get, HandlerError::Store(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        match (self.operation, &self.source) {
            (Operation::Create, _) => "Failed to create resource",
            (Operation::List, _) => "Failed to fetch resources",
            (Operation::Get, HandlerError::NotFound(_)) => "Resource not found",
            (Operation::Get, _) => "Failed to fetch resource",
            (Operation::Update, _) => "Failed to update resource",
            (Operation::Delete, _) => "Failed to delete resource",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(operation = %self.operation, error = %self.source, "request failed");
        } else {
            tracing::warn!(operation = %self.operation, error = %self.source, "request rejected");
        }
        error_response(status, self.message())
    }
}

/// Build the `{"error": ...}` body used for every failure response.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

//! Axum route handlers for the Stockroom resource API.

use std::any::Any;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use stockroom_core::{CreateResource, ListFilter, ResourceHandler, UpdateResource};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::error::{error_response, ApiError, Operation};

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router around the given handler.
pub fn create_router(handler: ResourceHandler) -> Router {
    Router::new()
        .route("/resources", get(list_resources).post(create_resource))
        .route(
            "/resources/{id}",
            get(get_resource).put(update_resource).delete(delete_resource),
        )
        .route("/health", get(health))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(handler)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `POST /resources` — create a resource, 201 with its JSON.
///
/// # Errors
/// Every failure is a 400 (`Failed to create resource`).
pub async fn create_resource(
    State(handler): State<ResourceHandler>,
    body: Result<Json<CreateResource>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = body.map_err(|e| ApiError::malformed(Operation::Create, e))?;
    let resource = handler
        .create(input)
        .await
        .map_err(|e| ApiError::new(Operation::Create, e))?;
    Ok((StatusCode::CREATED, Json(resource)))
}

/// `GET /resources?name=` — list resources newest first.
///
/// # Errors
/// Store failures are a 500 (`Failed to fetch resources`); an undecodable
/// query string is a 400.
pub async fn list_resources(
    State(handler): State<ResourceHandler>,
    query: Result<Query<ListFilter>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(filter) = query.map_err(|e| ApiError::malformed(Operation::List, e))?;
    let resources = handler
        .list(filter)
        .await
        .map_err(|e| ApiError::new(Operation::List, e))?;
    Ok(Json(resources))
}

/// `GET /resources/{id}` — fetch one resource.
///
/// # Errors
/// 404 when absent, 400 for a non-integer id, 500 on store failure.
pub async fn get_resource(
    State(handler): State<ResourceHandler>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::malformed(Operation::Get, e))?;
    let resource = handler
        .get(&id)
        .await
        .map_err(|e| ApiError::new(Operation::Get, e))?;
    Ok(Json(resource))
}

/// `PUT /resources/{id}` — partially update a resource.
///
/// # Errors
/// Every failure, including a missing id, is a 400 (`Failed to update resource`).
pub async fn update_resource(
    State(handler): State<ResourceHandler>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateResource>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::malformed(Operation::Update, e))?;
    let Json(input) = body.map_err(|e| ApiError::malformed(Operation::Update, e))?;
    let resource = handler
        .update(&id, input)
        .await
        .map_err(|e| ApiError::new(Operation::Update, e))?;
    Ok(Json(resource))
}

/// `DELETE /resources/{id}` — remove a resource, 204 with no body.
///
/// # Errors
/// Every failure, including a missing id, is a 400 (`Failed to delete resource`).
pub async fn delete_resource(
    State(handler): State<ResourceHandler>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::malformed(Operation::Delete, e))?;
    handler
        .delete(&id)
        .await
        .map_err(|e| ApiError::new(Operation::Delete, e))?;
    Ok(StatusCode::NO_CONTENT)
}

// ── Fallbacks ─────────────────────────────────────────────────────────────────

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

#[allow(clippy::needless_pass_by_value)]
fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("request handler panicked");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

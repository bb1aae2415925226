//! Core of the Stockroom single-resource service.
//!
//! Defines the `Resource` model, the validation rules for incoming requests,
//! the `ResourceStore` persistence interface with an in-memory reference
//! implementation, and the `ResourceHandler` that ties them together.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod handler;
pub mod id;
pub mod memory;
pub mod request;
pub mod resource;
pub mod store;

pub use error::{HandlerError, StoreError, ValidationError};
pub use handler::ResourceHandler;
pub use id::ResourceId;
pub use memory::MemoryStore;
pub use request::{CreateResource, ListFilter, UpdateResource};
pub use resource::{NewResource, Resource, ResourceName, ResourcePatch};
pub use store::ResourceStore;

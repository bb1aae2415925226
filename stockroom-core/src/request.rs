//! Request payloads as they arrive from the transport, before validation.

use serde::{Deserialize, Deserializer};

use crate::error::ValidationError;
use crate::resource::{NewResource, ResourceName, ResourcePatch};

/// Body of a create request: `{name, description?}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateResource {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of an update request: `{name?, description?}`.
///
/// The outer `Option` records whether the field was present at all, the
/// inner one whether it was `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateResource {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
}

/// Query of a list request: `?name=`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFilter {
    #[serde(default)]
    pub name: Option<String>,
}

impl ListFilter {
    /// The substring to match, or `None` when absent or empty.
    #[must_use]
    pub fn name_contains(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }
}

impl TryFrom<CreateResource> for NewResource {
    type Error = ValidationError;

    fn try_from(input: CreateResource) -> Result<Self, Self::Error> {
        let raw = input.name.ok_or(ValidationError::MissingName)?;
        Ok(NewResource::new(ResourceName::new(&raw)?, input.description))
    }
}

impl TryFrom<UpdateResource> for ResourcePatch {
    type Error = ValidationError;

    fn try_from(input: UpdateResource) -> Result<Self, Self::Error> {
        let name = match input.name {
            None => None,
            Some(None) => return Err(ValidationError::NullName),
            Some(Some(raw)) => Some(ResourceName::new(&raw)?),
        };
        Ok(ResourcePatch::new(name, input.description))
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::ResourceId;

/// The single entity kind managed by the service.
///
/// Serializes as `{id, name, description, createdAt}`; `description` is
/// `null` when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Resource {
    /// Store-assigned identifier, immutable.
    pub id: ResourceId,
    /// Display name, never empty.
    pub name: ResourceName,
    /// Free-form description.
    pub description: Option<String>,
    /// When the store accepted the resource, immutable.
    pub created_at: DateTime<Utc>,
}

impl Resource {
    /// Assembles a stored resource. Only stores should call this.
    #[must_use]
    pub fn new(
        id: ResourceId,
        name: ResourceName,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at,
        }
    }
}

/// A resource name that is guaranteed non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceName(String);

impl ResourceName {
    /// Trims surrounding whitespace and validates the remainder.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyName`] if nothing is left after trimming.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ResourceName {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl From<ResourceName> for String {
    fn from(name: ResourceName) -> Self {
        name.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated fields for inserting a new resource.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct NewResource {
    pub name: ResourceName,
    pub description: Option<String>,
}

impl NewResource {
    #[must_use]
    pub fn new(name: ResourceName, description: Option<String>) -> Self {
        Self { name, description }
    }
}

/// Validated partial update.
///
/// `None` leaves a field untouched. For `description`, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ResourcePatch {
    pub name: Option<ResourceName>,
    pub description: Option<Option<String>>,
}

impl ResourcePatch {
    #[must_use]
    pub fn new(name: Option<ResourceName>, description: Option<Option<String>>) -> Self {
        Self { name, description }
    }

    /// Returns `true` if applying this patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    /// Writes the present fields into `resource`. `id` and `created_at` are
    /// never touched.
    pub fn apply(self, resource: &mut Resource) {
        if let Some(name) = self.name {
            resource.name = name;
        }
        if let Some(description) = self.description {
            resource.description = description;
        }
    }
}

//! In-memory reference store.
//!
//! Rows live in a `BTreeMap` keyed by id behind a single `RwLock`, so every
//! mutation is serialized against every read.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{NewResource, Resource, ResourceId, ResourcePatch, ResourceStore, StoreError};

/// Source of creation timestamps.
pub type Clock = fn() -> DateTime<Utc>;

#[derive(Debug)]
struct Table {
    rows: BTreeMap<ResourceId, Resource>,
    next_id: i64,
    last_created_at: Option<DateTime<Utc>>,
}

/// Thread-safe in-memory [`ResourceStore`].
///
/// Ids start at 1 and only ever grow, so a deleted id is never handed out
/// again. Creation timestamps never run backwards, even if the clock does.
#[derive(Debug)]
pub struct MemoryStore {
    table: RwLock<Table>,
    clock: Clock,
}

impl MemoryStore {
    /// Create an empty store stamped by the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Create an empty store stamped by `clock`.
    #[must_use]
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
                last_created_at: None,
            }),
            clock,
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Table>, StoreError> {
        self.table
            .read()
            .map_err(|_| StoreError::Unavailable("resource table lock poisoned".to_owned()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Table>, StoreError> {
        self.table
            .write()
            .map_err(|_| StoreError::Unavailable("resource table lock poisoned".to_owned()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceStore for MemoryStore {
    async fn insert(&self, new: NewResource) -> Result<Resource, StoreError> {
        let mut table = self.write()?;
        let id = table.next_id;
        table.next_id = id
            .checked_add(1)
            .ok_or_else(|| StoreError::Constraint("resource id space exhausted".to_owned()))?;

        let now = (self.clock)();
        let created_at = table.last_created_at.map_or(now, |last| last.max(now));
        table.last_created_at = Some(created_at);

        let resource = Resource::new(ResourceId::new(id), new.name, new.description, created_at);
        table.rows.insert(resource.id, resource.clone());
        Ok(resource)
    }

    async fn find_many(&self, name_contains: Option<&str>) -> Result<Vec<Resource>, StoreError> {
        let table = self.read()?;
        let mut found: Vec<Resource> = table
            .rows
            .values()
            .filter(|r| name_contains.is_none_or(|needle| r.name.as_str().contains(needle)))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(found)
    }

    async fn find_by_id(&self, id: ResourceId) -> Result<Option<Resource>, StoreError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn update_by_id(
        &self,
        id: ResourceId,
        patch: ResourcePatch,
    ) -> Result<Option<Resource>, StoreError> {
        let mut table = self.write()?;
        let Some(resource) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply(resource);
        Ok(Some(resource.clone()))
    }

    async fn delete_by_id(&self, id: ResourceId) -> Result<bool, StoreError> {
        Ok(self.write()?.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::TimeZone;

    use super::*;
    use crate::ResourceName;

    fn new_resource(name: &str) -> NewResource {
        match ResourceName::new(name) {
            Ok(n) => NewResource::new(n, None),
            Err(e) => panic!("invalid name {name:?}: {e}"),
        }
    }

    async fn insert(store: &MemoryStore, name: &str) -> Resource {
        match store.insert(new_resource(name)).await {
            Ok(r) => r,
            Err(e) => panic!("insert failed: {e}"),
        }
    }

    fn frozen() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().unwrap_or_default()
    }

    fn names(resources: &[Resource]) -> Vec<&str> {
        resources.iter().map(|r| r.name.as_str()).collect()
    }

    #[tokio::test]
    async fn memory_store_assigns_increasing_ids_from_one() {
        let store = MemoryStore::new();
        assert_eq!(insert(&store, "a").await.id, ResourceId::new(1));
        assert_eq!(insert(&store, "b").await.id, ResourceId::new(2));
    }

    #[tokio::test]
    async fn memory_store_never_reuses_deleted_ids() {
        let store = MemoryStore::new();
        let first = insert(&store, "a").await;
        assert!(matches!(store.delete_by_id(first.id).await, Ok(true)));
        let second = insert(&store, "b").await;
        assert_eq!(second.id, ResourceId::new(2), "deleted id 1 must not be reassigned");
    }

    #[tokio::test]
    async fn memory_store_orders_ties_by_descending_id() {
        let store = MemoryStore::with_clock(frozen);
        for name in ["a", "b", "c"] {
            insert(&store, name).await;
        }
        let all = match store.find_many(None).await {
            Ok(v) => v,
            Err(e) => panic!("find_many failed: {e}"),
        };
        assert_eq!(names(&all), ["c", "b", "a"]);
        assert!(all.iter().all(|r| r.created_at == frozen()));
    }

    #[tokio::test]
    async fn memory_store_filter_is_case_sensitive_substring() {
        let store = MemoryStore::new();
        for name in ["Desk lamp", "lamp", "LAMP", "chair"] {
            insert(&store, name).await;
        }
        let found = match store.find_many(Some("lamp")).await {
            Ok(v) => v,
            Err(e) => panic!("find_many failed: {e}"),
        };
        assert_eq!(names(&found), ["lamp", "Desk lamp"]);
    }

    #[tokio::test]
    async fn memory_store_update_missing_returns_none() {
        let store = MemoryStore::new();
        let patch = ResourcePatch::new(None, Some(Some("x".to_owned())));
        assert!(matches!(store.update_by_id(ResourceId::new(9), patch).await, Ok(None)));
        assert!(matches!(store.delete_by_id(ResourceId::new(9)).await, Ok(false)));
        assert!(matches!(store.find_by_id(ResourceId::new(9)).await, Ok(None)));
    }

    #[tokio::test]
    async fn memory_store_update_preserves_id_and_created_at() {
        let store = MemoryStore::new();
        let created = insert(&store, "a").await;
        let name = match ResourceName::new("z") {
            Ok(n) => n,
            Err(e) => panic!("{e}"),
        };
        let patch = ResourcePatch::new(Some(name), None);
        let updated = match store.update_by_id(created.id, patch).await {
            Ok(Some(r)) => r,
            other => panic!("expected updated resource, got {other:?}"),
        };
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name.as_str(), "z");
    }

    #[tokio::test]
    async fn memory_store_exhausted_id_space_is_constraint_error() {
        let store = MemoryStore::new();
        match store.table.write() {
            Ok(mut table) => table.next_id = i64::MAX,
            Err(_) => panic!("fresh lock cannot be poisoned"),
        }
        assert!(matches!(
            store.insert(new_resource("a")).await,
            Err(StoreError::Constraint(_))
        ));
        assert!(matches!(store.find_many(None).await, Ok(v) if v.is_empty()));
    }

    #[tokio::test]
    async fn memory_store_poisoned_lock_reports_unavailable() {
        let store = Arc::new(MemoryStore::new());
        let poisoner = Arc::clone(&store);
        let joined = std::thread::spawn(move || {
            let _guard = poisoner.table.write();
            panic!("poison the resource table");
        })
        .join();
        assert!(joined.is_err(), "poisoning thread must panic");

        assert!(matches!(store.find_many(None).await, Err(StoreError::Unavailable(_))));
        assert!(matches!(
            store.insert(new_resource("a")).await,
            Err(StoreError::Unavailable(_))
        ));
    }
}

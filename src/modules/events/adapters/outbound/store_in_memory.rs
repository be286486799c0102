// In memory implementation of the EventStore port.
//
// Purpose
// - Hold created events for the process lifetime without a database.
//
// Responsibilities
// - Keep point lookups O(1) in a map while preserving insertion order for
//   enumeration through a separate id sequence.
// - Take the lock once per operation so each appears atomic to concurrent
//   callers.

use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::events::core::ports::{EventStore, StoreError};
use crate::modules::events::core::record::{EventPayload, EventRecord};

#[derive(Default)]
struct StoreInner {
    records: HashMap<String, EventRecord>,
    order: Vec<String>,
}

pub struct InMemoryEventStore {
    inner: RwLock<StoreInner>,
    is_offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("event store offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn create(&self, record: EventRecord) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        if guard.records.contains_key(&record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }
        guard.order.push(record.id.clone());
        guard.records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<EventRecord>, StoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.records.get(id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<EventRecord>, StoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .order
            .iter()
            .filter_map(|id| guard.records.get(id))
            .cloned()
            .collect())
    }

    async fn remove(&self, id: &str) -> Result<bool, StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        if guard.records.remove(id).is_none() {
            return Ok(false);
        }
        guard.order.retain(|existing| existing != id);
        Ok(true)
    }

    async fn update(&self, id: &str, data: EventPayload) -> Result<bool, StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        match guard.records.get_mut(id) {
            Some(record) => {
                record.data = data;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

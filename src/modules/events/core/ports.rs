// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the record store as a trait so handlers stay independent of
//   the concrete storage.
//
// Boundaries
// - No concrete storage here. Adapters implement these traits in the
//   adapters layer.
//
// Testing guidance
// - Provide in memory implementations for tests and local development.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::events::core::record::{EventPayload, EventRecord};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("event {0} already exists")]
    DuplicateId(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Process-lifetime bookkeeping of created events. Every operation appears
/// atomic relative to the others for a given id.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Insert a record under its caller-supplied unique id. Rejects an id
    /// that already exists.
    async fn create(&self, record: EventRecord) -> Result<(), StoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<EventRecord>, StoreError>;

    /// All records in insertion order. A snapshot: later mutations never
    /// alter an already-returned sequence.
    async fn get_all(&self) -> Result<Vec<EventRecord>, StoreError>;

    /// True iff a record existed and was removed.
    async fn remove(&self, id: &str) -> Result<bool, StoreError>;

    /// Replace the payload of an existing record, leaving `id` and
    /// `created_at` untouched. False if the id is unknown.
    async fn update(&self, id: &str, data: EventPayload) -> Result<bool, StoreError>;
}

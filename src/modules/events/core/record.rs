// Event record and payload data types.
//
// Purpose
// - Carry the created event as stored for the process lifetime: an opaque
//   id, the validated payload, and the creation timestamp.
//
// Responsibilities
// - Be independent of transport layer details; the store treats `data` as
//   opaque and never touches `id` or `created_at` after creation.

use serde::{Deserialize, Serialize};

/// Caller-supplied event fields. Optional fields default to the empty
/// string, mirroring the submission form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub date_time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub cost_per_person: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub data: EventPayload,
    /// Unix-millisecond creation timestamp. Immutable once set.
    pub created_at: i64,
}

// Shared test fixture for event payloads.

use crate::modules::events::core::record::EventPayload;

/// Fixed "now" used by validation tests: 2023-11-14T22:13:20Z.
pub const FIXED_NOW_MS: i64 = 1_700_000_000_000;

pub struct EventPayloadBuilder {
    inner: EventPayload,
}

impl Default for EventPayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventPayloadBuilder {
    pub fn new() -> Self {
        Self {
            inner: EventPayload {
                name: "Team Offsite".to_string(),
                phone: "+31612345678".to_string(),
                date_time: "2099-06-01T18:00:00+00:00".to_string(),
                location: "Amsterdam".to_string(),
                cost_per_person: "$25.00".to_string(),
                description: "Annual summer offsite".to_string(),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn phone(mut self, v: impl Into<String>) -> Self {
        self.inner.phone = v.into();
        self
    }

    pub fn date_time(mut self, v: impl Into<String>) -> Self {
        self.inner.date_time = v.into();
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn cost_per_person(mut self, v: impl Into<String>) -> Self {
        self.inner.cost_per_person = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn build(self) -> EventPayload {
        self.inner
    }
}

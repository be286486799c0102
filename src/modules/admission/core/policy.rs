// Admission policy data type.
//
// Purpose
// - Express how many requests a caller may make within one fixed window.
//
// Responsibilities
// - Carry the window length and request ceiling for the limiter to enforce.
// - Provide the named presets used by the API deployment.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatePolicy {
    pub name: String,
    pub window: Duration,
    pub max_requests: u32,
}

impl RatePolicy {
    /// `window` and `max_requests` must both be non-zero.
    pub fn new(name: impl Into<String>, window: Duration, max_requests: u32) -> Self {
        debug_assert!(!window.is_zero());
        debug_assert!(max_requests > 0);
        Self {
            name: name.into(),
            window,
            max_requests,
        }
    }

    /// 5 requests per minute. Applied to event creation.
    pub fn strict() -> Self {
        Self::new("strict", Duration::from_secs(60), 5)
    }

    /// 20 requests per minute. Applied to event updates.
    pub fn moderate() -> Self {
        Self::new("moderate", Duration::from_secs(60), 20)
    }

    /// 100 requests per minute.
    pub fn lenient() -> Self {
        Self::new("lenient", Duration::from_secs(60), 100)
    }
}

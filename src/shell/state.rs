use std::sync::Arc;

use crate::modules::admission::core::limiter::AdmissionLimiter;
use crate::modules::admission::core::policy::RatePolicy;
use crate::modules::events::core::ports::EventStore;
use crate::shell::config::Environment;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EventStore>,
    pub limiter: Arc<AdmissionLimiter>,
    pub environment: Environment,
    /// Policy applied to event creation.
    pub create_policy: RatePolicy,
    /// Policy applied to event updates.
    pub update_policy: RatePolicy,
}

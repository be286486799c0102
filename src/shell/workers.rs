// Background workers spawned by the composition root.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::modules::admission::core::limiter::AdmissionLimiter;

/// Periodically drop admission windows whose end has passed, so the table
/// stays bounded under many distinct caller identifiers.
pub fn spawn_window_sweeper(limiter: Arc<AdmissionLimiter>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = limiter.sweep_expired().await;
            if removed > 0 {
                tracing::debug!(removed, "evicted expired admission windows");
            }
        }
    })
}

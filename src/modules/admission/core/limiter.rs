// Fixed-window admission limiter.
//
// Purpose
// - Decide whether a caller's request may proceed under a named policy.
//
// Responsibilities
// - Count admitted requests per (policy, identifier) pair within hard
//   window boundaries; a rejected request is never counted.
// - Keep the check-then-mutate sequence atomic per pair so two concurrent
//   requests can never both take the last slot.
// - Evict windows whose end has passed, so the table stays bounded when
//   identifiers stop sending requests.

use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::admission::core::policy::RatePolicy;

/// Outcome of one admission check, with enough metadata for the caller to
/// build a throttling response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionDecision {
    pub admitted: bool,
    pub limit: u32,
    pub remaining: u32,
    /// Unix-millisecond timestamp at which the current window expires.
    pub reset_at: i64,
}

#[derive(Debug)]
struct WindowRecord {
    count: u32,
    window_end: i64,
}

/// Windows are keyed by (policy name, identifier) so independently named
/// policies never share a counter for the same caller.
pub struct AdmissionLimiter {
    windows: RwLock<HashMap<(String, String), WindowRecord>>,
}

impl AdmissionLimiter {
    pub fn new() -> Self {
        Self {
            windows: RwLock::new(HashMap::new()),
        }
    }

    /// Decide whether a request from `identifier` is admitted under
    /// `policy`. Always returns a decision; admission mutates the window
    /// record for the pair.
    pub async fn check(&self, policy: &RatePolicy, identifier: &str) -> AdmissionDecision {
        self.check_at(policy, identifier, Utc::now().timestamp_millis())
            .await
    }

    /// Remove every window whose end has passed. Returns how many records
    /// were dropped.
    pub async fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(Utc::now().timestamp_millis()).await
    }

    /// Number of currently tracked windows, expired ones included until the
    /// next sweep.
    pub async fn window_count(&self) -> usize {
        self.windows.read().await.len()
    }

    async fn check_at(&self, policy: &RatePolicy, identifier: &str, now_ms: i64) -> AdmissionDecision {
        let mut windows = self.windows.write().await;
        let key = (policy.name.clone(), identifier.to_string());

        if let Some(record) = windows.get_mut(&key) {
            if record.window_end > now_ms {
                if record.count < policy.max_requests {
                    record.count += 1;
                    return AdmissionDecision {
                        admitted: true,
                        limit: policy.max_requests,
                        remaining: policy.max_requests - record.count,
                        reset_at: record.window_end,
                    };
                }
                return AdmissionDecision {
                    admitted: false,
                    limit: policy.max_requests,
                    remaining: 0,
                    reset_at: record.window_end,
                };
            }
        }

        let window_end = now_ms + policy.window.as_millis() as i64;
        windows.insert(key, WindowRecord { count: 1, window_end });
        AdmissionDecision {
            admitted: true,
            limit: policy.max_requests,
            remaining: policy.max_requests - 1,
            reset_at: window_end,
        }
    }

    async fn sweep_expired_at(&self, now_ms: i64) -> usize {
        let mut windows = self.windows.write().await;
        let before = windows.len();
        windows.retain(|_, record| record.window_end > now_ms);
        before - windows.len()
    }
}

impl Default for AdmissionLimiter {
    fn default() -> Self {
        Self::new()
    }
}

//! Keyed request-rate admission control.
//!
//! A [`Session`](crate::Session) asks its limiter to admit every
//! outbound call before anything else happens. Denied calls are
//! rejected immediately, never queued or slept on, so the caller
//! decides whether to wait and resubmit.
//!
//! The trait is the seam for shared backing stores (several processes
//! coordinating through one counter). [`SlidingWindowLimiter`] is the
//! in-process implementation for single-instance deployments.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Admission control keyed by a logical client name.
///
/// `admit` must check and record atomically: two callers racing on the
/// same key must never both be admitted past the configured rate.
pub trait RateLimiter: Send + Sync {
    /// Returns `true` and records the call if `key` has budget left in
    /// the current window, `false` otherwise.
    fn admit(&self, key: &str) -> bool;
}

/// Sliding-window limiter holding per-key call timestamps.
///
/// Admits at most `max_per_window` calls per key within any rolling
/// window (one second unless overridden). The prune/check/record
/// sequence runs under a single lock, which gives the
/// compare-and-increment semantics concurrent callers need.
#[derive(Debug)]
pub struct SlidingWindowLimiter {
    max_per_window: u32,
    window: Duration,
    calls: Mutex<HashMap<String, Vec<Instant>>>,
}

impl SlidingWindowLimiter {
    /// Limiter admitting `max_per_window` calls per key per second.
    pub fn new(max_per_window: u32) -> Self {
        Self {
            max_per_window,
            window: Duration::from_secs(1),
            calls: Mutex::new(HashMap::new()),
        }
    }

    /// Override the window length. Mostly useful in tests.
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }
}

impl RateLimiter for SlidingWindowLimiter {
    fn admit(&self, key: &str) -> bool {
        let mut calls = self
            .calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let cutoff = Instant::now()
            .checked_sub(self.window)
            .unwrap_or_else(Instant::now);

        let timestamps = calls.entry(key.to_string()).or_default();
        timestamps.retain(|t| *t > cutoff);

        if timestamps.len() >= self.max_per_window as usize {
            return false;
        }
        timestamps.push(Instant::now());
        true
    }
}

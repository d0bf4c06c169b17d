//! Per-user request limiter.
//!
//! A fixed-window counter behind an `allow(user_id) -> bool` capability.
//! This is a transport-side collaborator: it knows nothing about the
//! engine and the engine knows nothing about it. It owns the only mutable
//! state in the crate.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::config;

struct WindowEntry {
    count: u32,
    window_start: Instant,
}

pub struct RateLimiter {
    max_per_window: u32,
    window: Duration,
    entries: Mutex<HashMap<String, WindowEntry>>,
}

impl RateLimiter {
    /// Limiter with a one-minute window.
    pub fn new(max_per_window: u32) -> Self {
        Self::with_window(max_per_window, Duration::from_secs(60))
    }

    pub fn with_window(max_per_window: u32, window: Duration) -> Self {
        RateLimiter {
            max_per_window,
            window,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Whether `user_id` may make another request in the current window.
    /// Counting is per user; windows reset lazily on the next call.
    pub fn allow(&self, user_id: &str) -> bool {
        let now = Instant::now();
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match entries.get_mut(user_id) {
            Some(entry) if now.duration_since(entry.window_start) < self.window => {
                if entry.count >= self.max_per_window {
                    tracing::warn!(max = self.max_per_window, "rate limit exceeded");
                    false
                } else {
                    entry.count += 1;
                    true
                }
            }
            _ => {
                entries.insert(
                    user_id.to_string(),
                    WindowEntry {
                        count: 1,
                        window_start: now,
                    },
                );
                true
            }
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        RateLimiter::new(config::MAX_REQUESTS_PER_MINUTE)
    }
}

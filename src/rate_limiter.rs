//! Sliding-window request limiter keyed by client address

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::clock::Clock;

const WINDOW_SECONDS: i64 = 60;
const CLEANUP_INTERVAL_SECONDS: i64 = 60;

#[derive(Debug)]
struct Windows {
    /// Request timestamps within the current minute, per client
    request_times: HashMap<String, Vec<DateTime<Utc>>>,
    /// Last cleanup time
    last_cleanup: DateTime<Utc>,
}

/// Rate limiter for incoming API requests
pub struct RateLimiter {
    windows: Mutex<Windows>,
    clock: Arc<dyn Clock>,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let now = clock.now();
        Self {
            windows: Mutex::new(Windows {
                request_times: HashMap::new(),
                last_cleanup: now,
            }),
            clock,
        }
    }

    /// Check if a request from `key` is allowed under `limit` per minute and record it
    pub fn is_allowed(&self, key: &str, limit: u32) -> bool {
        let now = self.clock.now();
        let cutoff = now - Duration::seconds(WINDOW_SECONDS);
        let mut windows = self
            .windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        Self::cleanup_old_requests(&mut windows, now);

        let times = windows.request_times.entry(key.to_string()).or_default();
        times.retain(|&time| time > cutoff);

        if times.len() >= limit as usize {
            false
        } else {
            times.push(now);
            true
        }
    }

    /// Requests `key` may still make in the current window
    pub fn remaining(&self, key: &str, limit: u32) -> u32 {
        let cutoff = self.clock.now() - Duration::seconds(WINDOW_SECONDS);
        let windows = self
            .windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let used = windows
            .request_times
            .get(key)
            .map_or(0, |times| times.iter().filter(|&&t| t > cutoff).count());
        limit.saturating_sub(u32::try_from(used).unwrap_or(u32::MAX))
    }

    /// Number of clients currently tracked
    pub fn tracked_clients(&self) -> usize {
        self.windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .request_times
            .len()
    }

    /// Drop idle clients at most once per interval
    fn cleanup_old_requests(windows: &mut Windows, now: DateTime<Utc>) {
        if now - windows.last_cleanup < Duration::seconds(CLEANUP_INTERVAL_SECONDS) {
            return;
        }
        let cutoff = now - Duration::seconds(WINDOW_SECONDS);
        windows.request_times.retain(|_, times| {
            times.retain(|&time| time > cutoff);
            !times.is_empty()
        });
        windows.last_cleanup = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::TimeZone;

    fn limiter() -> (RateLimiter, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
        ));
        (RateLimiter::new(clock.clone()), clock)
    }

    #[test]
    fn test_allows_requests_under_limit() {
        let (limiter, _) = limiter();
        for _ in 0..5 {
            assert!(limiter.is_allowed("192.168.1.1", 10));
        }
    }

    #[test]
    fn test_blocks_requests_over_limit() {
        let (limiter, _) = limiter();
        for _ in 0..5 {
            limiter.is_allowed("192.168.1.2", 5);
        }
        assert!(!limiter.is_allowed("192.168.1.2", 5));
    }

    #[test]
    fn test_different_clients_independent() {
        let (limiter, _) = limiter();
        for _ in 0..5 {
            limiter.is_allowed("ip1", 5);
        }
        assert!(limiter.is_allowed("ip2", 5));
    }

    #[test]
    fn test_remaining() {
        let (limiter, _) = limiter();
        assert_eq!(limiter.remaining("192.168.1.3", 10), 10);
        limiter.is_allowed("192.168.1.3", 10);
        assert_eq!(limiter.remaining("192.168.1.3", 10), 9);
    }

    #[test]
    fn test_window_slides() {
        let (limiter, clock) = limiter();
        for _ in 0..3 {
            assert!(limiter.is_allowed("client", 3));
        }
        assert!(!limiter.is_allowed("client", 3));

        clock.advance(Duration::seconds(61));
        assert!(limiter.is_allowed("client", 3));
    }

    #[test]
    fn test_idle_clients_are_cleaned_up() {
        let (limiter, clock) = limiter();
        limiter.is_allowed("a", 3);
        limiter.is_allowed("b", 3);
        assert_eq!(limiter.tracked_clients(), 2);

        clock.advance(Duration::seconds(120));
        limiter.is_allowed("c", 3);
        assert_eq!(limiter.tracked_clients(), 1);
    }
}

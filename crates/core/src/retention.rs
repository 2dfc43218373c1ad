// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Retention bounds applied to every channel.
//!
//! Two rules keep a channel from growing without bound: events older than
//! the retention window are evicted, and the channel never holds more than
//! the capacity cap (oldest out first). Both are enforced on every append
//! and re-checked by reads, so a quiet channel cannot serve stale events.

use chrono::{DateTime, Duration, Utc};

/// Events retained per channel before the oldest are dropped
pub const MAX_EVENTS_PER_CHANNEL: usize = 1000;

/// Minutes an event stays queryable before eviction
pub const MAX_EVENT_AGE_MINUTES: i64 = 60;

/// Minutes a query reaches back when the caller gives no lower bound
pub const DEFAULT_QUERY_WINDOW_MINUTES: i64 = 5;

/// Retention bounds for a bus instance.
///
/// The defaults are the production constants. Bounds are fixed at
/// construction; tests shrink them to exercise eviction cheaply.
#[derive(Debug, Clone)]
pub struct RetentionPolicy {
    /// Maximum events retained per channel
    pub max_events: usize,
    /// Maximum age of a retained event
    pub max_age: Duration,
    /// Window applied when a query has no explicit lower bound
    pub default_query_window: Duration,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            max_events: MAX_EVENTS_PER_CHANNEL,
            max_age: Duration::minutes(MAX_EVENT_AGE_MINUTES),
            default_query_window: Duration::minutes(DEFAULT_QUERY_WINDOW_MINUTES),
        }
    }
}

impl RetentionPolicy {
    /// Create bounds suitable for testing (lower values).
    pub fn for_testing() -> Self {
        Self {
            max_events: 10,
            max_age: Duration::minutes(60),
            default_query_window: Duration::minutes(5),
        }
    }

    /// Instant at or before which events count as expired, relative to `now`.
    ///
    /// The boundary is inclusive: an event exactly `max_age` old is gone.
    pub fn age_cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.max_age
    }
}

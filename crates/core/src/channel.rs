// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-audience bounded event storage.
//!
//! Each channel owns one oldest-first sequence of events behind its own
//! lock, so traffic on one audience never contends with another. Appends
//! take the write lock, assign the event's identity and timestamp inside
//! the critical section, then enforce the retention bounds. Reads share
//! the read lock and run against the live sequence; expired events that
//! no append has trimmed yet are filtered there rather than mutated away,
//! so reads never need the write lock.

use crate::clock::Clock;
use crate::event::{Event, EventId, EventKind, Payload};
use crate::retention::RetentionPolicy;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

pub(crate) struct Channel {
    events: RwLock<VecDeque<Event>>,
}

impl Channel {
    pub(crate) fn new() -> Self {
        Self {
            events: RwLock::new(VecDeque::new()),
        }
    }

    /// Append one event, assigning its id and timestamp under the write
    /// lock so both are ordered consistently with the append itself.
    ///
    /// The timestamp is clamped to the channel's newest event so a
    /// backwards wall-clock step cannot produce an out-of-order sequence.
    pub(crate) fn append<C: Clock>(
        &self,
        seq: &AtomicU64,
        clock: &C,
        policy: &RetentionPolicy,
        kind: EventKind,
        title: String,
        message: String,
        payload: Payload,
    ) -> EventId {
        let mut events = self.events.write().unwrap_or_else(|e| e.into_inner());
        let now = clock.now();
        let created_at = match events.back() {
            Some(last) if last.created_at > now => last.created_at,
            _ => now,
        };
        let id = EventId(seq.fetch_add(1, Ordering::SeqCst));
        events.push_back(Event {
            id,
            kind,
            title,
            message,
            payload,
            created_at,
        });
        Self::evict(&mut events, policy, now);
        id
    }

    /// Run `f` against the current sequence under the shared read lock.
    pub(crate) fn read<R>(&self, f: impl FnOnce(&VecDeque<Event>) -> R) -> R {
        let events = self.events.read().unwrap_or_else(|e| e.into_inner());
        f(&events)
    }

    /// Physically drop expired events. Returns how many were removed.
    pub(crate) fn trim_expired(&self, cutoff: DateTime<Utc>) -> usize {
        let mut events = self.events.write().unwrap_or_else(|e| e.into_inner());
        let before = events.len();
        Self::drop_expired(&mut events, cutoff);
        before - events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.events.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn evict(events: &mut VecDeque<Event>, policy: &RetentionPolicy, now: DateTime<Utc>) {
        Self::drop_expired(events, policy.age_cutoff(now));
        while events.len() > policy.max_events {
            events.pop_front();
        }
    }

    fn drop_expired(events: &mut VecDeque<Event>, cutoff: DateTime<Utc>) {
        // Oldest-first order means expired events are a prefix.
        while events.front().is_some_and(|e| e.created_at <= cutoff) {
            events.pop_front();
        }
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus for fanning notifications out to audience channels.
//!
//! One bus is built at the application's composition root and handed to
//! every collaborator; `Clone` shares the underlying state. Publishers
//! write one independent copy of an event per target audience, polling
//! clients read their own channel, and neither sees the other's traffic:
//! the channel map is only briefly locked to look up or insert a channel,
//! and each channel carries its own lock after that.
//!
//! Events are ephemeral. Nothing is persisted, and a process restart
//! starts every channel empty.

use crate::audience::Audience;
use crate::channel::Channel;
use crate::clock::{Clock, SystemClock};
use crate::event::{Event, EventId, EventKind, Payload};
use crate::query::{self, CountSummary, EventQuery, Since};
use crate::retention::RetentionPolicy;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::AtomicU64;
use std::sync::{Arc, RwLock};

/// Where one published copy of an event landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub audience: Audience,
    pub id: EventId,
}

/// Outcome of a maintenance sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Events dropped for exceeding the retention window
    pub evicted_events: usize,
    /// Emptied user channels removed from the map
    pub reclaimed_channels: usize,
}

/// The notification bus: a map of per-audience bounded channels
pub struct EventBus<C: Clock = SystemClock> {
    channels: Arc<RwLock<HashMap<Audience, Arc<Channel>>>>,
    /// Bus-wide id source; per-channel ids are strictly increasing
    seq: Arc<AtomicU64>,
    policy: RetentionPolicy,
    clock: C,
}

impl EventBus<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock, RetentionPolicy::default())
    }

    pub fn with_policy(policy: RetentionPolicy) -> Self {
        Self::with_clock(SystemClock, policy)
    }
}

impl Default for EventBus<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> EventBus<C> {
    pub fn with_clock(clock: C, policy: RetentionPolicy) -> Self {
        Self {
            channels: Arc::new(RwLock::new(HashMap::new())),
            seq: Arc::new(AtomicU64::new(1)),
            policy,
            clock,
        }
    }

    /// The retention bounds this bus was built with
    pub fn policy(&self) -> &RetentionPolicy {
        &self.policy
    }

    /// Publish one independent copy of an event to each audience.
    ///
    /// Each copy gets its own id; ids and timestamps are assigned inside
    /// the target channel's write critical section. An empty audience
    /// list publishes nothing.
    pub fn publish(
        &self,
        kind: EventKind,
        title: impl Into<String>,
        message: impl Into<String>,
        payload: Payload,
        audiences: &[Audience],
    ) -> Vec<Receipt> {
        let title = title.into();
        let message = message.into();
        let mut receipts = Vec::with_capacity(audiences.len());
        for &audience in audiences {
            let channel = self.channel(audience);
            let id = channel.append(
                &self.seq,
                &self.clock,
                &self.policy,
                kind,
                title.clone(),
                message.clone(),
                payload.clone(),
            );
            tracing::debug!(kind = %kind, audience = %audience, id = %id, "event published");
            receipts.push(Receipt { audience, id });
        }
        receipts
    }

    /// Events for one audience, oldest first.
    ///
    /// When `params.since` is unset the bus's default query window
    /// applies. More matches than `params.limit` drop the oldest surplus,
    /// so the caller always sees the newest `limit` events. An audience
    /// that was never published to gets an empty result, and no channel
    /// is created for it.
    pub fn query(&self, audience: Audience, params: &EventQuery) -> Vec<Event> {
        let now = self.clock.now();
        let cutoff = self.policy.age_cutoff(now);
        let since = self.resolve_since(params.since, now);
        let events = match self.existing_channel(audience) {
            Some(channel) => channel.read(|events| {
                query::filter(events.iter(), cutoff, since, params.kind, params.limit)
            }),
            None => Vec::new(),
        };
        tracing::trace!(audience = %audience, returned = events.len(), "query served");
        events
    }

    /// Total and per-kind counts for one audience over the same window
    /// and filtering rules as [`query`](Self::query), with no limit.
    ///
    /// The summary echoes the resolved lower bound so a poll loop can
    /// pass it back as its next `since`.
    pub fn count(&self, audience: Audience, since: Option<Since>) -> CountSummary {
        let now = self.clock.now();
        let cutoff = self.policy.age_cutoff(now);
        let since = self.resolve_since(since, now);
        let (total, by_kind) = match self.existing_channel(audience) {
            Some(channel) => channel.read(|events| query::count(events.iter(), cutoff, since)),
            None => (0, BTreeMap::new()),
        };
        CountSummary {
            total,
            since,
            by_kind,
        }
    }

    /// Drop expired events from every channel and remove user channels
    /// left empty. Role channels are permanent.
    ///
    /// Publication already evicts on every append, so this exists for
    /// operational hygiene: without it an idle user channel would pin its
    /// stale events (and map entry) until that user's next event.
    pub fn sweep(&self) -> SweepStats {
        let cutoff = self.policy.age_cutoff(self.clock.now());
        let mut stats = SweepStats::default();

        let handles: Vec<Arc<Channel>> = {
            let channels = self.channels.read().unwrap_or_else(|e| e.into_inner());
            channels.values().cloned().collect()
        };
        // Consumed by value so our handles are gone before the strong
        // count check below.
        for channel in handles {
            stats.evicted_events += channel.trim_expired(cutoff);
        }

        let mut channels = self.channels.write().unwrap_or_else(|e| e.into_inner());
        let before = channels.len();
        // Holding the map write lock means no publisher can obtain a new
        // handle, so a strong count of 1 proves the map holds the only
        // reference and no racing append can revive this channel.
        channels.retain(|audience, channel| {
            audience.is_role_wide() || Arc::strong_count(channel) > 1 || !channel.is_empty()
        });
        stats.reclaimed_channels = before - channels.len();

        tracing::debug!(
            evicted = stats.evicted_events,
            reclaimed = stats.reclaimed_channels,
            "sweep finished"
        );
        stats
    }

    /// Number of live channels
    pub fn channel_count(&self) -> usize {
        self.channels
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    fn resolve_since(&self, since: Option<Since>, now: DateTime<Utc>) -> DateTime<Utc> {
        match since {
            Some(since) => since.resolve(now),
            None => now - self.policy.default_query_window,
        }
    }

    fn channel(&self, audience: Audience) -> Arc<Channel> {
        {
            let channels = self.channels.read().unwrap_or_else(|e| e.into_inner());
            if let Some(channel) = channels.get(&audience) {
                return Arc::clone(channel);
            }
        }
        let mut channels = self.channels.write().unwrap_or_else(|e| e.into_inner());
        Arc::clone(
            channels
                .entry(audience)
                .or_insert_with(|| Arc::new(Channel::new())),
        )
    }

    fn existing_channel(&self, audience: Audience) -> Option<Arc<Channel>> {
        let channels = self.channels.read().unwrap_or_else(|e| e.into_inner());
        channels.get(&audience).map(Arc::clone)
    }
}

impl<C: Clock> Clone for EventBus<C> {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
            seq: Arc::clone(&self.seq),
            policy: self.policy.clone(),
            clock: self.clock.clone(),
        }
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;

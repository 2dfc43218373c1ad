// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-side filtering over channel contents.
//!
//! Queries are stateless: they never mutate the channel, never create one,
//! and treat events past the retention cutoff as already evicted even when
//! no append has trimmed them yet. Results come back oldest first so
//! clients render them in the order they happened; when more events match
//! than the limit allows, the oldest surplus is dropped and the newest
//! `limit` survive.

use crate::event::{Event, EventKind};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Events returned by a query when the caller does not set a limit
pub const DEFAULT_QUERY_LIMIT: usize = 50;

/// Lower time bound of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Since {
    /// Everything at or after an absolute instant
    Absolute(DateTime<Utc>),
    /// Everything within the last `n` minutes
    MinutesAgo(i64),
}

impl Since {
    /// Resolve to an absolute lower bound against `now`.
    ///
    /// A window wider than the calendar floors to the earliest
    /// representable instant, which matches everything retained.
    pub fn resolve(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Since::Absolute(at) => *at,
            Since::MinutesAgo(minutes) => Duration::try_minutes(*minutes)
                .and_then(|window| now.checked_sub_signed(window))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        }
    }
}

impl From<DateTime<Utc>> for Since {
    fn from(at: DateTime<Utc>) -> Self {
        Since::Absolute(at)
    }
}

/// Filter parameters for [`EventBus::query`](crate::bus::EventBus::query)
#[derive(Debug, Clone, Copy)]
pub struct EventQuery {
    /// Lower bound on `created_at`; defaults to the bus's query window
    pub since: Option<Since>,
    /// Only events of this kind, when set
    pub kind: Option<EventKind>,
    /// Maximum events returned
    pub limit: usize,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            since: None,
            kind: None,
            limit: DEFAULT_QUERY_LIMIT,
        }
    }
}

impl EventQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn since(mut self, since: impl Into<Since>) -> Self {
        self.since = Some(since.into());
        self
    }

    pub fn last_minutes(mut self, minutes: i64) -> Self {
        self.since = Some(Since::MinutesAgo(minutes));
        self
    }

    pub fn kind(mut self, kind: EventKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Cardinalities served to a badge-style unread counter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountSummary {
    /// Matching events in the window
    pub total: usize,
    /// The resolved absolute lower bound the count covered
    pub since: DateTime<Utc>,
    /// Matching events per kind; absent kinds have no entry
    pub by_kind: BTreeMap<EventKind, usize>,
}

/// Matching events, oldest first, cloned out of the channel.
///
/// `cutoff` is the retention boundary; events at or before it are treated
/// as evicted. Keeps the newest `limit` matches.
pub(crate) fn filter<'a>(
    events: impl Iterator<Item = &'a Event>,
    cutoff: DateTime<Utc>,
    since: DateTime<Utc>,
    kind: Option<EventKind>,
    limit: usize,
) -> Vec<Event> {
    let mut matched: Vec<Event> = events
        .filter(|e| e.created_at > cutoff && e.created_at >= since)
        .filter(|e| kind.map_or(true, |k| e.kind == k))
        .cloned()
        .collect();
    if matched.len() > limit {
        matched.drain(..matched.len() - limit);
    }
    matched
}

/// Total and per-kind cardinalities over the same filter as [`filter`],
/// without cloning events or applying a limit.
pub(crate) fn count<'a>(
    events: impl Iterator<Item = &'a Event>,
    cutoff: DateTime<Utc>,
    since: DateTime<Utc>,
) -> (usize, BTreeMap<EventKind, usize>) {
    let mut total = 0;
    let mut by_kind = BTreeMap::new();
    for event in events {
        if event.created_at > cutoff && event.created_at >= since {
            total += 1;
            *by_kind.entry(event.kind).or_insert(0) += 1;
        }
    }
    (total, by_kind)
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event types carried by the notification bus

use crate::error::ParseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque event identifier, strictly increasing within a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "evt-{}", self.0)
    }
}

/// The closed set of notification kinds the platform emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// A customer placed a new order
    NewOrder,

    /// An order moved to a new lifecycle state
    StateChanged,

    /// An order was assigned to a courier
    OrderAssigned,

    /// The kitchen finished preparing an order
    OrderReady,

    /// The courier left with the order
    CourierEnRoute,

    /// The courier is at the customer's address
    CourierNearby,
}

impl EventKind {
    /// All kinds, in a stable order
    pub const ALL: [EventKind; 6] = [
        EventKind::NewOrder,
        EventKind::StateChanged,
        EventKind::OrderAssigned,
        EventKind::OrderReady,
        EventKind::CourierEnRoute,
        EventKind::CourierNearby,
    ];

    /// Wire form used by the polling endpoints
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::NewOrder => "new-order",
            EventKind::StateChanged => "state-changed",
            EventKind::OrderAssigned => "order-assigned",
            EventKind::OrderReady => "order-ready",
            EventKind::CourierEnRoute => "courier-en-route",
            EventKind::CourierNearby => "courier-nearby",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new-order" => Ok(EventKind::NewOrder),
            "state-changed" => Ok(EventKind::StateChanged),
            "order-assigned" => Ok(EventKind::OrderAssigned),
            "order-ready" => Ok(EventKind::OrderReady),
            "courier-en-route" => Ok(EventKind::CourierEnRoute),
            "courier-nearby" => Ok(EventKind::CourierNearby),
            other => Err(ParseError::UnknownKind(other.to_string())),
        }
    }
}

/// Structured data attached to an event, opaque to the bus
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// A single notification delivered to one audience channel
///
/// Identity and timestamp are assigned by the bus at publication; the
/// remaining fields are authored by the publisher. `created_at` is
/// non-decreasing within a channel even across wall-clock steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "event_id")]
    pub id: EventId,
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Short headline shown in the notification list
    pub title: String,
    /// One-line human-readable body
    pub message: String,
    pub payload: Payload,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;

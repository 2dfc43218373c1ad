// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Domain notices and their audience resolution.
//!
//! Every notification the platform can emit is one variant here, carrying
//! the data its payload needs. Kind, audiences, texts, and payload shape
//! are all derived from the variant, so adding a notice means adding a
//! variant and letting the compiler point at every match that must learn
//! about it. There is no string-keyed dispatch to fall out of sync.

use crate::status::OrderStatus;
use ob_core::{Audience, EventKind, Payload, UserId};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

/// Unique identifier for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The order reference carried in every notice payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRef {
    /// Database id of the order
    pub id: OrderId,
    /// Customer-visible tracking token
    pub token: String,
}

impl OrderRef {
    pub fn new(id: i64, token: impl Into<String>) -> Self {
        Self {
            id: OrderId(id),
            token: token.into(),
        }
    }
}

/// A geographic position reported by a courier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// One domain notice, ready to publish
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// A customer placed an order; the kitchen and the admins hear it
    NewOrder {
        order: OrderRef,
        customer_name: String,
        item_count: u32,
        total: f64,
    },

    /// An order moved to a new state; its customer hears it
    StateChanged {
        order: OrderRef,
        customer: UserId,
        status: OrderStatus,
    },

    /// An order was assigned for delivery; the courier hears it
    OrderAssigned {
        order: OrderRef,
        courier: UserId,
        address: String,
    },

    /// The kitchen finished an order; the assigned courier hears it
    OrderReady { order: OrderRef, courier: UserId },

    /// The courier left with the order; the customer hears it
    CourierEnRoute {
        order: OrderRef,
        customer: UserId,
        courier_name: String,
    },

    /// The courier is at the customer's address; the customer hears it
    CourierNearby {
        order: OrderRef,
        customer: UserId,
        courier_name: String,
        location: Option<GeoPoint>,
        note: Option<String>,
    },
}

impl Notice {
    /// The event kind this notice publishes as
    pub fn kind(&self) -> EventKind {
        match self {
            Notice::NewOrder { .. } => EventKind::NewOrder,
            Notice::StateChanged { .. } => EventKind::StateChanged,
            Notice::OrderAssigned { .. } => EventKind::OrderAssigned,
            Notice::OrderReady { .. } => EventKind::OrderReady,
            Notice::CourierEnRoute { .. } => EventKind::CourierEnRoute,
            Notice::CourierNearby { .. } => EventKind::CourierNearby,
        }
    }

    /// The channels this notice lands in, fixed per variant
    pub fn audiences(&self) -> Vec<Audience> {
        match self {
            Notice::NewOrder { .. } => vec![Audience::kitchen(), Audience::admins()],
            Notice::StateChanged { customer, .. }
            | Notice::CourierEnRoute { customer, .. }
            | Notice::CourierNearby { customer, .. } => vec![Audience::customer(*customer)],
            Notice::OrderAssigned { courier, .. } | Notice::OrderReady { courier, .. } => {
                vec![Audience::courier(*courier)]
            }
        }
    }

    /// Short headline shown in the notification list
    pub fn title(&self) -> String {
        match self {
            Notice::NewOrder { .. } => "New order".to_string(),
            Notice::StateChanged { order, .. } => format!("Order {}", order.token),
            Notice::OrderAssigned { .. } => "New delivery assigned".to_string(),
            Notice::OrderReady { .. } => "Order ready for pickup".to_string(),
            Notice::CourierEnRoute { .. } => "Your order is on its way".to_string(),
            Notice::CourierNearby { .. } => "Your courier has arrived!".to_string(),
        }
    }

    /// One-line human-readable body
    pub fn message(&self) -> String {
        match self {
            Notice::NewOrder {
                order,
                customer_name,
                item_count,
                ..
            } => format!(
                "Order #{} from {} ({} items)",
                order.id, customer_name, item_count
            ),
            Notice::StateChanged { status, .. } => status.customer_message().to_string(),
            Notice::OrderAssigned { order, address, .. } => {
                format!("Order {} to {}", order.token, address)
            }
            Notice::OrderReady { order, .. } => {
                format!("Order {} is ready in the kitchen", order.token)
            }
            Notice::CourierEnRoute { courier_name, .. } => {
                format!("{courier_name} is bringing your order")
            }
            Notice::CourierNearby { courier_name, .. } => {
                format!("{courier_name} is outside with your order")
            }
        }
    }

    /// The structured payload, shape fixed per variant
    pub fn payload(&self) -> Payload {
        let value = match self {
            Notice::NewOrder {
                order,
                customer_name,
                item_count,
                total,
            } => json!({
                "order_id": order.id,
                "token": order.token,
                "customer": customer_name,
                "item_count": item_count,
                "total": total,
            }),
            Notice::StateChanged { order, status, .. } => json!({
                "order_id": order.id,
                "token": order.token,
                "status": status,
            }),
            Notice::OrderAssigned { order, address, .. } => json!({
                "order_id": order.id,
                "token": order.token,
                "address": address,
            }),
            Notice::OrderReady { order, .. } => json!({
                "order_id": order.id,
                "token": order.token,
            }),
            Notice::CourierEnRoute {
                order,
                courier_name,
                ..
            } => json!({
                "order_id": order.id,
                "token": order.token,
                "courier": courier_name,
            }),
            Notice::CourierNearby {
                order,
                courier_name,
                location,
                note,
                ..
            } => json!({
                "order_id": order.id,
                "token": order.token,
                "courier": courier_name,
                "location": location,
                "note": note,
            }),
        };
        match value {
            // json! with braces always builds an object
            serde_json::Value::Object(map) => map,
            _ => Payload::new(),
        }
    }
}

#[cfg(test)]
#[path = "notice_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Order lifecycle states and the customer-facing message catalog

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle states of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    InKitchen,
    ReadyForDelivery,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Stable wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::InKitchen => "in-kitchen",
            OrderStatus::ReadyForDelivery => "ready-for-delivery",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// What the customer reads when their order enters this state.
    ///
    /// Total over the enum, so a new state cannot ship without its
    /// message.
    pub fn customer_message(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Your order has been received and is awaiting confirmation",
            OrderStatus::Confirmed => "Your order has been confirmed and is being prepared",
            OrderStatus::InKitchen => "Your order is being prepared in the kitchen",
            OrderStatus::ReadyForDelivery => {
                "Your order is ready! A courier will pick it up shortly"
            }
            OrderStatus::OutForDelivery => "Your order is on its way",
            OrderStatus::Delivered => "Your order has been delivered. Enjoy!",
            OrderStatus::Cancelled => "Your order has been cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;

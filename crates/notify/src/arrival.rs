// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Courier arrival signals.
//!
//! A courier app reports "I am at the door" with its position and an
//! optional free-text note. The signal converts into a courier-nearby
//! notice for the order's customer, with the extras riding in the payload
//! rather than the message text.

use crate::notice::{GeoPoint, Notice, OrderRef};
use ob_core::UserId;
use serde::{Deserialize, Serialize};

/// An arrival report as received from the courier app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalSignal {
    /// The order being delivered
    pub order: OrderRef,
    /// The customer to notify
    pub customer: UserId,
    /// Courier display name used in the notification text
    pub courier_name: String,
    /// Position the courier reported from
    pub location: GeoPoint,
    /// Optional instruction for the hand-off ("blue gate", "call me")
    pub note: Option<String>,
}

impl From<ArrivalSignal> for Notice {
    fn from(signal: ArrivalSignal) -> Self {
        Notice::CourierNearby {
            order: signal.order,
            customer: signal.customer,
            courier_name: signal.courier_name,
            location: Some(signal.location),
            note: signal.note,
        }
    }
}

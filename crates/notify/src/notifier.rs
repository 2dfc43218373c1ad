// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Publication facade for domain collaborators.
//!
//! Order creation, the kitchen workflow, and courier assignment each hold
//! a `Notifier` handle and call one method per business moment. Delivery
//! is fire-and-forget; the returned receipts say where the copies landed
//! and are usually ignored.

use crate::arrival::ArrivalSignal;
use crate::notice::{Notice, OrderRef};
use crate::status::OrderStatus;
use ob_core::{Clock, EventBus, Receipt, SystemClock, UserId};

pub struct Notifier<C: Clock = SystemClock> {
    bus: EventBus<C>,
}

impl<C: Clock> Notifier<C> {
    pub fn new(bus: EventBus<C>) -> Self {
        Self { bus }
    }

    /// The bus this notifier publishes to
    pub fn bus(&self) -> &EventBus<C> {
        &self.bus
    }

    /// Publish any notice to its resolved audiences
    pub fn publish(&self, notice: &Notice) -> Vec<Receipt> {
        let receipts = self.bus.publish(
            notice.kind(),
            notice.title(),
            notice.message(),
            notice.payload(),
            &notice.audiences(),
        );
        tracing::debug!(kind = %notice.kind(), copies = receipts.len(), "notice published");
        receipts
    }

    /// A customer placed an order: tell the kitchen and the admins.
    pub fn order_placed(
        &self,
        order: &OrderRef,
        customer_name: &str,
        item_count: u32,
        total: f64,
    ) -> Vec<Receipt> {
        self.publish(&Notice::NewOrder {
            order: order.clone(),
            customer_name: customer_name.to_string(),
            item_count,
            total,
        })
    }

    /// An order moved to a new state: tell its customer.
    pub fn status_changed(
        &self,
        order: &OrderRef,
        customer: UserId,
        status: OrderStatus,
    ) -> Vec<Receipt> {
        self.publish(&Notice::StateChanged {
            order: order.clone(),
            customer,
            status,
        })
    }

    /// An order was assigned for delivery: tell the courier.
    pub fn order_assigned(&self, order: &OrderRef, courier: UserId, address: &str) -> Vec<Receipt> {
        self.publish(&Notice::OrderAssigned {
            order: order.clone(),
            courier,
            address: address.to_string(),
        })
    }

    /// The kitchen finished an order: tell the assigned courier.
    ///
    /// An order without a courier yet publishes nothing.
    pub fn order_ready(&self, order: &OrderRef, courier: Option<UserId>) -> Vec<Receipt> {
        match courier {
            Some(courier) => self.publish(&Notice::OrderReady {
                order: order.clone(),
                courier,
            }),
            None => {
                tracing::debug!(order = %order.id, "order ready with no courier assigned, skipping");
                Vec::new()
            }
        }
    }

    /// The courier left with the order: tell the customer.
    pub fn courier_en_route(
        &self,
        order: &OrderRef,
        customer: UserId,
        courier_name: &str,
    ) -> Vec<Receipt> {
        self.publish(&Notice::CourierEnRoute {
            order: order.clone(),
            customer,
            courier_name: courier_name.to_string(),
        })
    }

    /// A courier reported arrival at the customer's address.
    pub fn courier_arrived(&self, signal: ArrivalSignal) -> Vec<Receipt> {
        self.publish(&Notice::from(signal))
    }
}

impl<C: Clock> Clone for Notifier<C> {
    fn clone(&self) -> Self {
        Self {
            bus: self.bus.clone(),
        }
    }
}

#[cfg(test)]
#[path = "notifier_tests.rs"]
mod tests;

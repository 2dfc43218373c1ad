// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ob-notify: Domain notification layer for the Order Bell backend
//!
//! This crate provides:
//! - The closed set of notices the platform emits, with compile-time
//!   audience resolution
//! - The order lifecycle states and their customer-facing messages
//! - Courier arrival ingestion
//! - A `Notifier` facade that domain collaborators publish through
//!
//! The bus itself lives in `ob-core`; nothing here touches a channel
//! directly.

pub mod arrival;
pub mod notice;
pub mod notifier;
pub mod status;

// Re-exports
pub use arrival::ArrivalSignal;
pub use notice::{GeoPoint, Notice, OrderId, OrderRef};
pub use notifier::Notifier;
pub use status::OrderStatus;

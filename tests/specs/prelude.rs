//! Shared helpers for the behavioral specs.

#![allow(dead_code)]

pub use chrono::Duration;
pub use ob_core::{
    Audience, Clock, Event, EventBus, EventKind, EventQuery, FakeClock, Payload, RetentionPolicy,
    Since, UserId,
};
pub use ob_notify::{ArrivalSignal, GeoPoint, Notice, Notifier, OrderRef, OrderStatus};

/// A bus on simulated time plus the clock that drives it.
pub fn sim_bus() -> (EventBus<FakeClock>, FakeClock) {
    let clock = FakeClock::new();
    let bus = EventBus::with_clock(clock.clone(), RetentionPolicy::default());
    (bus, clock)
}

/// A notifier over a simulated-time bus.
pub fn sim_notifier() -> (Notifier<FakeClock>, FakeClock) {
    let (bus, clock) = sim_bus();
    (Notifier::new(bus), clock)
}

pub fn order(id: i64) -> OrderRef {
    OrderRef::new(id, format!("A-{id}"))
}

/// Everything still retained for an audience, regardless of the default
/// poll window.
pub fn drain(bus: &EventBus<FakeClock>, audience: Audience) -> Vec<Event> {
    bus.query(
        audience,
        &EventQuery::new().last_minutes(120).limit(usize::MAX),
    )
}

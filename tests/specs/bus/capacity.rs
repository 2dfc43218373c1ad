//! Channel capacity specs
//!
//! A channel never holds more than a thousand events; the oldest goes out
//! first, and other channels are unaffected.

use crate::prelude::*;

#[test]
fn the_thousand_and_first_event_displaces_the_first() {
    let (notifier, _clock) = sim_notifier();
    let customer = UserId(4);

    for i in 0..1001 {
        let status = if i % 2 == 0 {
            OrderStatus::Confirmed
        } else {
            OrderStatus::InKitchen
        };
        notifier.status_changed(&order(i), customer, status);
    }

    let events = drain(notifier.bus(), Audience::customer(customer));
    assert_eq!(events.len(), 1000);

    // order-0's event fell off the front; order-1's is now oldest.
    assert_eq!(events[0].payload["order_id"], serde_json::json!(1));
    assert_eq!(
        events.last().unwrap().payload["order_id"],
        serde_json::json!(1000)
    );
}

#[test]
fn capacity_is_per_channel_not_global() {
    let (notifier, _clock) = sim_notifier();

    for i in 0..1001 {
        notifier.status_changed(&order(i), UserId(4), OrderStatus::Confirmed);
    }
    notifier.status_changed(&order(9000), UserId(5), OrderStatus::Confirmed);

    // The busy neighbor displaced nothing of this customer's.
    let quiet = drain(notifier.bus(), Audience::customer(UserId(5)));
    assert_eq!(quiet.len(), 1);
    assert_eq!(quiet[0].payload["order_id"], serde_json::json!(9000));
}

#[test]
fn displaced_events_do_not_count() {
    let (notifier, _clock) = sim_notifier();
    let customer = UserId(4);

    for i in 0..1050 {
        notifier.status_changed(&order(i), customer, OrderStatus::Confirmed);
    }

    let summary = notifier
        .bus()
        .count(Audience::customer(customer), Some(Since::MinutesAgo(60)));
    assert_eq!(summary.total, 1000);
}

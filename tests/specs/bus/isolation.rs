//! Channel isolation specs
//!
//! Audiences never observe each other's events, and concurrent traffic on
//! one channel cannot corrupt another.

use crate::prelude::*;

#[test]
fn customers_only_see_their_own_channel() {
    let (notifier, _clock) = sim_notifier();

    notifier.status_changed(&order(1), UserId(4), OrderStatus::Confirmed);
    notifier.status_changed(&order(2), UserId(5), OrderStatus::Cancelled);

    let a = drain(notifier.bus(), Audience::customer(UserId(4)));
    assert_eq!(a.len(), 1);
    assert_eq!(a[0].payload["order_id"], serde_json::json!(1));

    let b = drain(notifier.bus(), Audience::customer(UserId(5)));
    assert_eq!(b.len(), 1);
    assert_eq!(b[0].payload["order_id"], serde_json::json!(2));
}

#[test]
fn a_role_channel_is_not_a_member_channel() {
    let (bus, _clock) = sim_bus();

    // Role-wide courier traffic and one courier's personal feed.
    bus.publish(
        EventKind::NewOrder,
        "New order",
        "role-wide",
        Payload::new(),
        &[Audience::couriers()],
    );
    bus.publish(
        EventKind::OrderAssigned,
        "New delivery assigned",
        "personal",
        Payload::new(),
        &[Audience::courier(UserId(17))],
    );

    let role_wide = drain(&bus, Audience::couriers());
    assert_eq!(role_wide.len(), 1);
    assert_eq!(role_wide[0].message, "role-wide");

    let personal = drain(&bus, Audience::courier(UserId(17)));
    assert_eq!(personal.len(), 1);
    assert_eq!(personal[0].message, "personal");
}

#[test]
fn unrelated_audiences_stay_empty() {
    let (notifier, _clock) = sim_notifier();

    notifier.order_placed(&order(7), "Ana", 2, 18.5);

    assert!(drain(notifier.bus(), Audience::couriers()).is_empty());
    assert!(drain(notifier.bus(), Audience::customers()).is_empty());
    assert!(drain(notifier.bus(), Audience::customer(UserId(4))).is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn heavy_traffic_on_one_channel_leaves_neighbors_intact() {
    let bus = EventBus::new();

    // A flood on customer 1's channel while customer 2 receives exactly
    // three events.
    let flood = {
        let bus = bus.clone();
        tokio::task::spawn_blocking(move || {
            for i in 0..500 {
                bus.publish(
                    EventKind::StateChanged,
                    "Order A-1",
                    format!("flood-{i}"),
                    Payload::new(),
                    &[Audience::customer(UserId(1))],
                );
            }
        })
    };
    let trickle = {
        let bus = bus.clone();
        tokio::task::spawn_blocking(move || {
            for status in [
                OrderStatus::Confirmed,
                OrderStatus::OutForDelivery,
                OrderStatus::Delivered,
            ] {
                bus.publish(
                    EventKind::StateChanged,
                    "Order B-2",
                    status.customer_message(),
                    Payload::new(),
                    &[Audience::customer(UserId(2))],
                );
            }
        })
    };
    flood.await.unwrap();
    trickle.await.unwrap();

    let quiet = bus.query(
        Audience::customer(UserId(2)),
        &EventQuery::new().limit(usize::MAX),
    );
    assert_eq!(quiet.len(), 3);
    assert_eq!(quiet[0].message, OrderStatus::Confirmed.customer_message());
    assert_eq!(quiet[2].message, OrderStatus::Delivered.customer_message());
}

//! Count consistency specs
//!
//! A count over a window always matches the cardinality of an unlimited
//! query over the same window, and the per-kind map sums to the total.

use crate::prelude::*;

fn seed(notifier: &Notifier<FakeClock>, clock: &FakeClock) {
    let customer = UserId(4);
    notifier.status_changed(&order(7), customer, OrderStatus::Confirmed);
    clock.advance(Duration::minutes(3));
    notifier.status_changed(&order(7), customer, OrderStatus::OutForDelivery);
    notifier.courier_en_route(&order(7), customer, "Luis");
    clock.advance(Duration::minutes(1));
    notifier.courier_arrived(ArrivalSignal {
        order: order(7),
        customer,
        courier_name: "Luis".to_string(),
        location: GeoPoint { lat: -12.05, lon: -77.03 },
        note: None,
    });
}

#[test]
fn count_matches_an_unlimited_query_over_the_same_window() {
    let (notifier, clock) = sim_notifier();
    seed(&notifier, &clock);
    let audience = Audience::customer(UserId(4));

    for minutes in [1, 2, 5, 30] {
        let events = notifier.bus().query(
            audience,
            &EventQuery::new().last_minutes(minutes).limit(usize::MAX),
        );
        let summary = notifier
            .bus()
            .count(audience, Some(Since::MinutesAgo(minutes)));

        assert_eq!(summary.total, events.len(), "window of {minutes} minutes");
        assert_eq!(summary.by_kind.values().sum::<usize>(), summary.total);
    }
}

#[test]
fn by_kind_breaks_the_total_down() {
    let (notifier, clock) = sim_notifier();
    seed(&notifier, &clock);

    let summary = notifier
        .bus()
        .count(Audience::customer(UserId(4)), Some(Since::MinutesAgo(30)));

    assert_eq!(summary.total, 4);
    assert_eq!(summary.by_kind[&EventKind::StateChanged], 2);
    assert_eq!(summary.by_kind[&EventKind::CourierEnRoute], 1);
    assert_eq!(summary.by_kind[&EventKind::CourierNearby], 1);
    assert!(!summary.by_kind.contains_key(&EventKind::NewOrder));
}

#[test]
fn the_summary_echoes_its_resolved_lower_bound() {
    let (bus, clock) = sim_bus();

    let summary = bus.count(Audience::kitchen(), Some(Since::MinutesAgo(10)));
    assert_eq!(summary.since, clock.now() - Duration::minutes(10));

    let absolute = clock.now() - Duration::minutes(2);
    let summary = bus.count(Audience::kitchen(), Some(Since::from(absolute)));
    assert_eq!(summary.since, absolute);

    // Unset means the default five-minute poll window.
    let summary = bus.count(Audience::kitchen(), None);
    assert_eq!(summary.since, clock.now() - Duration::minutes(5));
}

#[test]
fn counting_an_unknown_audience_is_zero_and_creates_nothing() {
    let (bus, _clock) = sim_bus();

    let summary = bus.count(Audience::customer(UserId(99)), None);
    assert_eq!(summary.total, 0);
    assert!(summary.by_kind.is_empty());
    assert_eq!(bus.channel_count(), 0);
}

#[test]
fn serialized_summary_uses_wire_kind_names() {
    let (notifier, clock) = sim_notifier();
    seed(&notifier, &clock);

    let summary = notifier
        .bus()
        .count(Audience::customer(UserId(4)), Some(Since::MinutesAgo(30)));
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["total"], serde_json::json!(4));
    assert_eq!(json["by_kind"]["state-changed"], serde_json::json!(2));
    assert_eq!(json["by_kind"]["courier-nearby"], serde_json::json!(1));
}

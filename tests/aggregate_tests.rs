use chrono::{Datelike, Duration, Local, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use spending_graph::core::{ChargeEvent, DateWindow, aggregate_charges};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn charge_at(day: NaiveDate, hour: u32, amount: i64) -> ChargeEvent {
    let timestamp = Local
        .with_ymd_and_hms(day.year(), day.month(), day.day(), hour, 0, 0)
        .single()
        .expect("unambiguous local time")
        .with_timezone(&Utc);
    ChargeEvent::new(timestamp, amount)
}

fn charge_on(day: NaiveDate, amount: i64) -> ChargeEvent {
    charge_at(day, 12, amount)
}

#[test]
fn january_scenario_produces_two_ordered_points() {
    let window = DateWindow::new(date(2024, 1, 1), date(2024, 1, 10));
    let charges = [
        charge_at(date(2024, 1, 3), 9, 200),
        charge_at(date(2024, 1, 3), 18, 300),
        charge_on(date(2024, 1, 7), 1000),
    ];

    let points = aggregate_charges(&charges, window, 1000);
    assert_eq!(points.len(), 2);

    assert_eq!(points[0].day_offset, 2);
    assert_eq!(points[0].amount_total, 500);
    assert_eq!(points[0].time_fraction, 2.0 / 9.0);
    assert_eq!(points[0].amount_fraction, 0.5);

    assert_eq!(points[1].day_offset, 6);
    assert_eq!(points[1].amount_total, 1000);
    assert_eq!(points[1].time_fraction, 6.0 / 9.0);
    assert_eq!(points[1].amount_fraction, 0.0);
}

#[test]
fn window_boundaries_are_inclusive() {
    let window = DateWindow::new(date(2024, 2, 1), date(2024, 2, 8));
    let charges = [
        charge_at(date(2024, 2, 1), 0, 100),
        charge_at(date(2024, 2, 8), 23, 200),
    ];

    let points = aggregate_charges(&charges, window, 1000);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].day_offset, 0);
    assert_eq!(points[1].day_offset, window.len_days());
}

#[test]
fn out_of_window_charges_yield_empty_sequence() {
    let window = DateWindow::new(date(2024, 3, 10), date(2024, 3, 20));
    let charges = [
        charge_on(date(2024, 3, 9), 500),
        charge_on(date(2024, 3, 21), 500),
        charge_on(date(2023, 3, 15), 500),
    ];

    assert!(aggregate_charges(&charges, window, 1000).is_empty());
}

#[test]
fn single_day_window_defines_time_fraction_as_zero() {
    let day = date(2024, 4, 2);
    let window = DateWindow::new(day, day);
    let charges = [charge_on(day, 300), charge_on(day, 200)];

    let points = aggregate_charges(&charges, window, 1000);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].day_offset, 0);
    assert_eq!(points[0].time_fraction, 0.0);
    assert_eq!(points[0].amount_total, 500);
}

#[test]
fn totals_above_ceiling_are_not_clamped() {
    let window = DateWindow::new(date(2024, 5, 1), date(2024, 5, 10));
    let charges = [charge_on(date(2024, 5, 4), 1500)];

    let points = aggregate_charges(&charges, window, 1000);
    assert_eq!(points[0].amount_fraction, -0.5);
}

#[test]
fn zero_ceiling_follows_ieee_division() {
    let window = DateWindow::new(date(2024, 5, 1), date(2024, 5, 10));
    let charges = [charge_on(date(2024, 5, 4), 100)];

    let points = aggregate_charges(&charges, window, 0);
    assert!(!points[0].amount_fraction.is_finite());
}

#[test]
fn aggregation_is_deterministic() {
    let window = DateWindow::new(date(2024, 6, 1), date(2024, 6, 30));
    let charges: Vec<ChargeEvent> = (0..40)
        .map(|i| charge_on(date(2024, 6, 1 + (i % 28) as u32), 10 + i))
        .collect();

    let first = aggregate_charges(&charges, window, 2000);
    let second = aggregate_charges(&charges, window, 2000);
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn grouping_conserves_in_window_totals(
        entries in prop::collection::vec((-5i64..25, 0i64..10_000), 0..64)
    ) {
        let start = date(2024, 6, 1);
        let end = date(2024, 6, 20);
        let window = DateWindow::new(start, end);

        let charges: Vec<ChargeEvent> = entries
            .iter()
            .map(|&(offset, amount)| charge_on(start + Duration::days(offset), amount))
            .collect();

        let expected: i64 = charges
            .iter()
            .filter(|charge| window.contains(charge.local_date()))
            .map(|charge| charge.amount)
            .sum();
        let points = aggregate_charges(&charges, window, 1000);
        let total: i64 = points.iter().map(|point| point.amount_total).sum();
        prop_assert_eq!(total, expected);
    }

    #[test]
    fn points_are_strictly_ascending_with_one_per_day(
        entries in prop::collection::vec((0i64..20, 1i64..500), 1..48)
    ) {
        let start = date(2024, 7, 1);
        let window = DateWindow::new(start, date(2024, 7, 21));

        let charges: Vec<ChargeEvent> = entries
            .iter()
            .map(|&(offset, amount)| charge_on(start + Duration::days(offset), amount))
            .collect();

        let points = aggregate_charges(&charges, window, 1000);
        prop_assert!(!points.is_empty());
        for pair in points.windows(2) {
            prop_assert!(pair[0].day_offset < pair[1].day_offset);
            prop_assert!(pair[0].time_fraction < pair[1].time_fraction);
        }
    }
}

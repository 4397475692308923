use chrono::NaiveDate;
use indexmap::IndexMap;
use tracing::debug;

use crate::core::{ChargeEvent, DataPoint, DateWindow};

/// Groups charges by local calendar day and normalizes each day into [0, 1]
/// fractions against the window length and the supplied amount ceiling.
///
/// Charges dated outside the inclusive window are dropped. The result is
/// ordered ascending by `day_offset` with one point per distinct day and
/// zeroed pixel coordinates; callers project afterwards with the current
/// viewport.
///
/// `amount_fraction` is deliberately unclamped: a day total above
/// `max_amount` lands below 0, and a non-positive ceiling follows IEEE
/// division rather than failing.
pub fn aggregate_charges(
    charges: &[ChargeEvent],
    window: DateWindow,
    max_amount: i64,
) -> Vec<DataPoint> {
    let len_days = window.len_days();

    let mut by_date: IndexMap<NaiveDate, DataPoint> = IndexMap::new();
    for charge in charges {
        let date = charge.local_date();
        if !window.contains(date) {
            continue;
        }

        let point = by_date.entry(date).or_insert_with(|| {
            let day_offset = window.day_offset(date);
            let time_fraction = if len_days == 0 {
                0.0
            } else {
                day_offset as f64 / len_days as f64
            };
            DataPoint {
                day_offset,
                time_fraction,
                amount_total: 0,
                amount_fraction: 0.0,
                pixel_x: 0.0,
                pixel_y: 0.0,
            }
        });
        point.amount_total += charge.amount;
    }

    let mut points: Vec<DataPoint> = by_date.into_values().collect();
    points.sort_by_key(|point| point.day_offset);
    for point in &mut points {
        point.amount_fraction = 1.0 - point.amount_total as f64 / max_amount as f64;
    }

    debug!(
        charge_count = charges.len(),
        point_count = points.len(),
        len_days,
        "aggregated charges into daily points"
    );
    points
}

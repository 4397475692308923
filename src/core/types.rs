use chrono::{DateTime, Local, NaiveDate, Utc};

/// Drawing surface size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Zero size reported until the host delivers the first resize.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            width: 0,
            height: 0,
        }
    }

    #[must_use]
    pub fn is_known(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One raw spending record supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeEvent {
    pub timestamp: DateTime<Utc>,
    /// Non-negative by caller contract; not validated here.
    pub amount: i64,
}

impl ChargeEvent {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, amount: i64) -> Self {
        Self { timestamp, amount }
    }

    /// Calendar day of this charge in the host's local time zone.
    #[must_use]
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.with_timezone(&Local).date_naive()
    }
}

/// One aggregated day of spending, normalized and pixel-projected.
///
/// `time_fraction` and `amount_fraction` are derived during aggregation and
/// never touched afterwards; `pixel_x`/`pixel_y` are recomputed from them on
/// every aggregation and every resize. `amount_fraction` uses an inverted
/// scale (larger totals yield smaller fractions) so bigger spending plots
/// higher with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    /// Days since window start, `0..=window.len_days()`.
    pub day_offset: i64,
    pub time_fraction: f64,
    pub amount_total: i64,
    pub amount_fraction: f64,
    pub pixel_x: f64,
    pub pixel_y: f64,
}

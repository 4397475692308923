use chrono::NaiveDate;

/// Inclusive date range charges aggregate over.
///
/// Callers guarantee `start <= end`; behavior for a reversed window is
/// unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Window length in whole days; 0 for a single-day window.
    #[must_use]
    pub fn len_days(self) -> i64 {
        (self.end - self.start).num_days()
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Days from window start to `date`; meaningful only for contained dates.
    #[must_use]
    pub fn day_offset(self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::DateWindow;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn boundaries_are_inclusive() {
        let window = DateWindow::new(date(2024, 1, 1), date(2024, 1, 10));
        assert!(window.contains(date(2024, 1, 1)));
        assert!(window.contains(date(2024, 1, 10)));
        assert!(!window.contains(date(2023, 12, 31)));
        assert!(!window.contains(date(2024, 1, 11)));
    }

    #[test]
    fn single_day_window_has_zero_length() {
        let window = DateWindow::new(date(2024, 3, 5), date(2024, 3, 5));
        assert_eq!(window.len_days(), 0);
        assert_eq!(window.day_offset(date(2024, 3, 5)), 0);
    }

    #[test]
    fn day_offset_spans_window() {
        let window = DateWindow::new(date(2024, 1, 1), date(2024, 1, 10));
        assert_eq!(window.len_days(), 9);
        assert_eq!(window.day_offset(date(2024, 1, 3)), 2);
        assert_eq!(window.day_offset(date(2024, 1, 10)), 9);
    }
}

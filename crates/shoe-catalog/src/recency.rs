//! Recency window for "new release" listings.

use chrono::{DateTime, Duration, Months, Utc};

/// How long after its release date a listing counts as new.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecencyWindow {
    /// New while `now - release < days`.
    RollingDays(u32),
    /// New while the release is after the same instant one calendar month
    /// earlier (day clamped to the length of that month).
    CalendarMonth,
}

impl Default for RecencyWindow {
    fn default() -> Self {
        RecencyWindow::RollingDays(30)
    }
}

impl RecencyWindow {
    /// Whether `release` is inside the window ending at `now`.
    ///
    /// Future release dates are inside every window.
    pub fn contains(&self, release: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            RecencyWindow::RollingDays(days) => {
                now.signed_duration_since(release) < Duration::days(i64::from(*days))
            }
            RecencyWindow::CalendarMonth => match now.checked_sub_months(Months::new(1)) {
                Some(cutoff) => release > cutoff,
                None => true,
            },
        }
    }

    /// Short description for logs and the CLI.
    pub fn describe(&self) -> String {
        match self {
            RecencyWindow::RollingDays(days) => format!("last {} days", days),
            RecencyWindow::CalendarMonth => "last calendar month".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_rolling_window_boundary() {
        let now = at(2026, 10, 17);
        let window = RecencyWindow::default();

        assert!(window.contains(now - Duration::days(5), now));
        assert!(window.contains(now - Duration::days(30) + Duration::seconds(1), now));
        assert!(!window.contains(now - Duration::days(30), now));
        assert!(!window.contains(now - Duration::days(400), now));
    }

    #[test]
    fn test_future_release_is_new() {
        let now = at(2026, 10, 17);
        assert!(RecencyWindow::default().contains(now + Duration::days(3), now));
        assert!(RecencyWindow::CalendarMonth.contains(now + Duration::days(3), now));
    }

    #[test]
    fn test_calendar_month() {
        let window = RecencyWindow::CalendarMonth;
        let now = at(2026, 3, 31);

        // One month before March 31 clamps to February 28.
        assert!(window.contains(at(2026, 3, 1), now));
        assert!(!window.contains(at(2026, 2, 28), now));
        assert!(!window.contains(at(2026, 2, 27), now));
    }

    #[test]
    fn test_calendar_month_differs_from_rolling() {
        // July has 31 days: July 1 noon is 30 days before July 31 noon.
        let now = at(2026, 7, 31);
        let release = at(2026, 7, 1);

        assert!(!RecencyWindow::RollingDays(30).contains(release, now));
        assert!(RecencyWindow::CalendarMonth.contains(release, now));
    }

    #[test]
    fn test_describe() {
        assert_eq!(RecencyWindow::RollingDays(14).describe(), "last 14 days");
        assert_eq!(RecencyWindow::CalendarMonth.describe(), "last calendar month");
    }
}

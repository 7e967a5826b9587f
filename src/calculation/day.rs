//! Day-of-week helpers.

use chrono::{Datelike, NaiveDateTime, Weekday};

/// Returns true if the given clock-in time falls on a Sunday.
///
/// The Sunday flag feeds the union rule that treats all Sunday work as
/// overtime; the day is taken from the clock-in, matching how the approval
/// screen classifies a shift.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::is_sunday;
/// use chrono::NaiveDateTime;
///
/// // 2024-03-10 is a Sunday
/// let sunday = NaiveDateTime::parse_from_str("2024-03-10 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(is_sunday(sunday));
///
/// let monday = NaiveDateTime::parse_from_str("2024-03-11 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(!is_sunday(monday));
/// ```
pub fn is_sunday(datetime: NaiveDateTime) -> bool {
    datetime.weekday() == Weekday::Sun
}

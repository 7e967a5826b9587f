//! Night-premium overlap calculation.
//!
//! Hours worked inside the configured nightly window are tagged as
//! night-premium hours. The tag is an informational overlay on hours
//! already classified as regular or overtime; it is not a third pay
//! bucket and never multiplies pay.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, PayrollRules};

/// The result of measuring a shift's overlap with the night window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightPremiumResult {
    /// Hours of the shift falling within the night window, capped at the
    /// shift's net worked hours.
    pub night_hours: Decimal,
    /// The audit step recording this measurement.
    pub audit_step: AuditStep,
}

/// Measures the overlap between a shift interval and the night window.
///
/// The window is `[night_premium_start, night_premium_end)` in local time
/// and may wrap past midnight (for example 22:00-06:00). The overlap is the
/// exact intersection of the raw clock interval with every nightly
/// occurrence of the window the shift touches, capped at `cap_hours` so the
/// tag never exceeds the break-deducted net hours. A zero-length window
/// (start equal to end) disables the tag.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::calculate_night_premium;
/// use timecard_engine::models::{PayrollRules, RuleMode};
/// use chrono::{NaiveDateTime, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rules = PayrollRules {
///     mode: RuleMode::Company,
///     daily_overtime_threshold: Decimal::from_str("8").unwrap(),
///     night_premium_start: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     night_premium_end: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///     auto_break_threshold: Decimal::from_str("6").unwrap(),
///     auto_break_duration: 30,
///     calculate_sundays_as_ot: false,
///     week_start_day: None,
/// };
///
/// // A 20:00 -> 02:00 shift overlaps the window from 22:00 to 02:00.
/// let clock_in = NaiveDateTime::parse_from_str("2024-03-08 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let clock_out = NaiveDateTime::parse_from_str("2024-03-09 02:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let result = calculate_night_premium(clock_in, clock_out, &rules, Decimal::from_str("6").unwrap(), 1);
/// assert_eq!(result.night_hours, Decimal::from_str("4").unwrap());
/// ```
pub fn calculate_night_premium(
    clock_in: NaiveDateTime,
    clock_out: NaiveDateTime,
    rules: &PayrollRules,
    cap_hours: Decimal,
    step_number: u32,
) -> NightPremiumResult {
    let mut overlap_seconds: i64 = 0;

    if rules.night_premium_start != rules.night_premium_end {
        // Walk every nightly occurrence of the window the interval could
        // touch. Starting one day early covers a wrapped window that began
        // the evening before clock-in.
        let mut date = clock_in.date() - Duration::days(1);
        let last_date = clock_out.date();

        while date <= last_date {
            let window_start = date.and_time(rules.night_premium_start);
            let window_end = if rules.night_window_wraps() {
                (date + Duration::days(1)).and_time(rules.night_premium_end)
            } else {
                date.and_time(rules.night_premium_end)
            };

            let start = window_start.max(clock_in);
            let end = window_end.min(clock_out);
            if end > start {
                overlap_seconds += (end - start).num_seconds();
            }

            date += Duration::days(1);
        }
    }

    let overlap_hours = Decimal::from(overlap_seconds) / Decimal::from(3600);
    let night_hours = overlap_hours.min(cap_hours).max(Decimal::ZERO);

    let reasoning = if night_hours > Decimal::ZERO {
        format!(
            "{} hours of the shift fall within the {}-{} night window",
            night_hours.normalize(),
            rules.night_premium_start.format("%H:%M"),
            rules.night_premium_end.format("%H:%M")
        )
    } else {
        format!(
            "no overlap with the {}-{} night window",
            rules.night_premium_start.format("%H:%M"),
            rules.night_premium_end.format("%H:%M")
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "night_premium".to_string(),
        rule_name: "Night-Premium Overlap".to_string(),
        input: serde_json::json!({
            "clock_in": clock_in.to_string(),
            "clock_out": clock_out.to_string(),
            "window_start": rules.night_premium_start.format("%H:%M").to_string(),
            "window_end": rules.night_premium_end.format("%H:%M").to_string()
        }),
        output: serde_json::json!({
            "night_hours": night_hours.normalize().to_string()
        }),
        reasoning,
    };

    NightPremiumResult {
        night_hours,
        audit_step,
    }
}

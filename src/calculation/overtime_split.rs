//! Regular/overtime split functionality.
//!
//! This module splits net worked hours into regular and overtime portions
//! against the daily overtime threshold, with the union override that
//! classifies all Sunday work as overtime.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, PayrollRules};

/// The result of splitting net hours into regular and overtime portions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Hours at the base pay rate (up to the daily threshold).
    pub regular_hours: Decimal,
    /// Hours beyond the threshold, or all hours on a designated OT day.
    pub overtime_hours: Decimal,
    /// The audit step recording this split.
    pub audit_step: AuditStep,
}

/// Splits net worked hours into regular and overtime.
///
/// Rules are applied in order:
/// 1. If `rules.calculate_sundays_as_ot` is set and the shift falls on a
///    Sunday, all net hours are overtime regardless of the daily threshold.
/// 2. Otherwise hours above `rules.daily_overtime_threshold` are overtime
///    and the remainder is regular. A shift exactly at the threshold has
///    no overtime.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::split_overtime;
/// use timecard_engine::models::{PayrollRules, RuleMode};
/// use chrono::NaiveTime;
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
/// let split = split_overtime(Decimal::from_str("9.5").unwrap(), &rules, false, 1);
/// assert_eq!(split.regular_hours, Decimal::from_str("8").unwrap());
/// assert_eq!(split.overtime_hours, Decimal::from_str("1.5").unwrap());
/// ```
pub fn split_overtime(
    net_hours: Decimal,
    rules: &PayrollRules,
    is_sunday: bool,
    step_number: u32,
) -> OvertimeSplit {
    let threshold = rules.daily_overtime_threshold;

    let (regular_hours, overtime_hours, reasoning) = if rules.calculate_sundays_as_ot && is_sunday {
        (
            Decimal::ZERO,
            net_hours,
            format!(
                "Sunday shift under {} rules: all {} hours are overtime",
                rules.mode,
                net_hours.normalize()
            ),
        )
    } else if net_hours > threshold {
        (
            threshold,
            net_hours - threshold,
            format!(
                "{} net hours exceeds the {} hour threshold by {} hours",
                net_hours.normalize(),
                threshold.normalize(),
                (net_hours - threshold).normalize()
            ),
        )
    } else {
        (
            net_hours,
            Decimal::ZERO,
            format!(
                "{} net hours is within the {} hour threshold, no overtime",
                net_hours.normalize(),
                threshold.normalize()
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_split".to_string(),
        rule_name: "Regular/Overtime Split".to_string(),
        input: serde_json::json!({
            "net_hours": net_hours.normalize().to_string(),
            "threshold": threshold.normalize().to_string(),
            "is_sunday": is_sunday,
            "calculate_sundays_as_ot": rules.calculate_sundays_as_ot
        }),
        output: serde_json::json!({
            "regular_hours": regular_hours.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string()
        }),
        reasoning,
    };

    OvertimeSplit {
        regular_hours,
        overtime_hours,
        audit_step,
    }
}

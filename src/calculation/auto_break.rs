//! Auto-break deduction functionality.
//!
//! When a shift's gross duration exceeds the configured threshold, an
//! automatic unpaid break is deducted from the worked hours. The deducted
//! minutes are recorded separately for downstream display and audit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, PayrollRules};

/// The result of applying the auto-break rule to a gross duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoBreakResult {
    /// Net worked hours after the deduction, floored at zero.
    pub net_hours: Decimal,
    /// Minutes deducted (0 when the threshold was not exceeded).
    pub break_duration_minutes: u32,
    /// The audit step recording this deduction.
    pub audit_step: AuditStep,
}

/// Applies the auto-break deduction to a gross worked duration.
///
/// If `gross_hours` strictly exceeds `rules.auto_break_threshold`, the
/// configured break duration is deducted; a shift of exactly the threshold
/// length deducts nothing. Net hours never go below zero.
///
/// # Arguments
///
/// * `gross_hours` - The gross shift duration in fractional hours
/// * `rules` - The governing rule set
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::apply_auto_break;
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
/// let result = apply_auto_break(Decimal::from_str("8.5").unwrap(), &rules, 1);
/// assert_eq!(result.net_hours, Decimal::from_str("8.0").unwrap());
/// assert_eq!(result.break_duration_minutes, 30);
///
/// let result = apply_auto_break(Decimal::from_str("6.0").unwrap(), &rules, 1);
/// assert_eq!(result.break_duration_minutes, 0);
/// ```
pub fn apply_auto_break(
    gross_hours: Decimal,
    rules: &PayrollRules,
    step_number: u32,
) -> AutoBreakResult {
    let break_duration_minutes = if gross_hours > rules.auto_break_threshold {
        rules.auto_break_duration
    } else {
        0
    };

    let deducted_hours = Decimal::from(break_duration_minutes) / Decimal::from(60);
    let net_hours = (gross_hours - deducted_hours).max(Decimal::ZERO);

    let reasoning = if break_duration_minutes > 0 {
        format!(
            "{} gross hours exceeds the {} hour threshold, deducting a {} minute break",
            gross_hours.normalize(),
            rules.auto_break_threshold.normalize(),
            break_duration_minutes
        )
    } else {
        format!(
            "{} gross hours is within the {} hour threshold, no break deducted",
            gross_hours.normalize(),
            rules.auto_break_threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "auto_break".to_string(),
        rule_name: "Auto-Break Deduction".to_string(),
        input: serde_json::json!({
            "gross_hours": gross_hours.normalize().to_string(),
            "threshold": rules.auto_break_threshold.normalize().to_string(),
            "break_duration_minutes": rules.auto_break_duration
        }),
        output: serde_json::json!({
            "net_hours": net_hours.normalize().to_string(),
            "break_duration_minutes": break_duration_minutes
        }),
        reasoning,
    };

    AutoBreakResult {
        net_hours,
        break_duration_minutes,
        audit_step,
    }
}

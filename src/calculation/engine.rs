//! The payroll computation entry point.
//!
//! [`compute_payroll`] is the one authoritative implementation of the
//! timecard pay rules: gross duration, auto-break deduction, the
//! regular/overtime split, the night-premium overlay, and the pay total,
//! applied in that order. It is a pure function; recomputing at approval
//! time with the same inputs yields the same result.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditTrace, AuditWarning, PayrollBreakdown, PayrollRules, WarningSeverity};

use super::auto_break::apply_auto_break;
use super::night_premium::calculate_night_premium;
use super::overtime_split::split_overtime;
use super::pay::calculate_total_pay;

/// Computes the payroll breakdown for one timecard interval.
///
/// # Arguments
///
/// * `clock_in`, `clock_out` - The raw clock interval. `clock_out` must be
///   strictly after `clock_in`.
/// * `rules` - The governing rule set, selected by the caller from the
///   project's union flag. Passed explicitly on every call; the engine
///   holds no rule cache.
/// * `is_sunday` - Whether the shift falls on a Sunday (see
///   [`super::is_sunday`]).
/// * `hourly_rate`, `reimbursement` - Money inputs. `None` means the value
///   is missing from the source data: the computation proceeds with zero
///   and the result is flagged low-confidence instead of failing, so a
///   reviewer can correct it before approval.
///
/// # Returns
///
/// A full-precision [`PayrollBreakdown`]; call
/// [`PayrollBreakdown::rounded`] at the formatting boundary.
///
/// # Errors
///
/// * [`EngineError::InvalidInterval`] when `clock_out <= clock_in`
/// * [`EngineError::InvalidRules`] when the rule set fails validation
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::compute_payroll;
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
/// let clock_in = NaiveDateTime::parse_from_str("2024-03-10 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let clock_out = NaiveDateTime::parse_from_str("2024-03-10 17:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let breakdown = compute_payroll(
///     clock_in,
///     clock_out,
///     &rules,
///     true,
///     Some(Decimal::from_str("25.00").unwrap()),
///     None,
/// ).unwrap();
///
/// assert_eq!(breakdown.rounded().total_pay, Decimal::from_str("200.00").unwrap());
/// ```
pub fn compute_payroll(
    clock_in: NaiveDateTime,
    clock_out: NaiveDateTime,
    rules: &PayrollRules,
    is_sunday: bool,
    hourly_rate: Option<Decimal>,
    reimbursement: Option<Decimal>,
) -> EngineResult<PayrollBreakdown> {
    if clock_out <= clock_in {
        return Err(EngineError::InvalidInterval {
            clock_in,
            clock_out,
        });
    }
    rules.validate()?;

    let mut steps = Vec::new();
    let mut warnings = Vec::new();
    let mut low_confidence = false;

    // Step 1: gross duration in fractional hours, full precision.
    let gross_hours = Decimal::from((clock_out - clock_in).num_seconds()) / Decimal::from(3600);

    // Step 2: auto-break deduction.
    let break_result = apply_auto_break(gross_hours, rules, 1);
    steps.push(break_result.audit_step.clone());

    // Step 3: regular/overtime split.
    let split = split_overtime(break_result.net_hours, rules, is_sunday, 2);
    steps.push(split.audit_step.clone());

    // Step 4: night-premium overlay, capped at net hours.
    let night = calculate_night_premium(clock_in, clock_out, rules, break_result.net_hours, 3);
    steps.push(night.audit_step.clone());

    // Missing money fields default to zero rather than blocking the
    // computation; the low-confidence flag keeps the gap visible.
    let rate = resolve_money_input(
        hourly_rate,
        "MISSING_RATE",
        "hourly rate missing, pay computed at $0",
        &mut warnings,
        &mut low_confidence,
    );
    let reimbursement = resolve_money_input(
        reimbursement,
        "MISSING_REIMBURSEMENT",
        "reimbursement missing, treated as $0",
        &mut warnings,
        &mut low_confidence,
    );

    // Step 5: pay total.
    let pay = calculate_total_pay(split.regular_hours, split.overtime_hours, rate, reimbursement, 4);
    steps.push(pay.audit_step.clone());

    Ok(PayrollBreakdown {
        regular_hours: split.regular_hours,
        overtime_hours: split.overtime_hours,
        night_premium_hours: night.night_hours,
        net_total_hours: break_result.net_hours,
        break_duration_minutes: break_result.break_duration_minutes,
        total_pay: pay.total_pay,
        low_confidence,
        audit_trace: AuditTrace { steps, warnings },
    })
}

/// Resolves an optional money input, warning on gaps and clamping negatives.
fn resolve_money_input(
    value: Option<Decimal>,
    missing_code: &str,
    missing_message: &str,
    warnings: &mut Vec<AuditWarning>,
    low_confidence: &mut bool,
) -> Decimal {
    match value {
        Some(v) if v >= Decimal::ZERO => v,
        Some(v) => {
            warnings.push(AuditWarning {
                code: "NEGATIVE_MONEY_INPUT".to_string(),
                message: format!("negative value {} clamped to 0", v.normalize()),
                severity: WarningSeverity::High,
            });
            *low_confidence = true;
            Decimal::ZERO
        }
        None => {
            warnings.push(AuditWarning {
                code: missing_code.to_string(),
                message: missing_message.to_string(),
                severity: WarningSeverity::Medium,
            });
            *low_confidence = true;
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RuleMode;
    use chrono::NaiveTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn company_rules() -> PayrollRules {
        PayrollRules {
            mode: RuleMode::Company,
            daily_overtime_threshold: dec("8"),
            night_premium_start: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            night_premium_end: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            auto_break_threshold: dec("6"),
            auto_break_duration: 30,
            calculate_sundays_as_ot: false,
            week_start_day: Some("monday".to_string()),
        }
    }

    fn union_rules() -> PayrollRules {
        PayrollRules {
            mode: RuleMode::Union,
            daily_overtime_threshold: dec("8"),
            night_premium_start: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            night_premium_end: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            auto_break_threshold: dec("6"),
            auto_break_duration: 30,
            calculate_sundays_as_ot: true,
            week_start_day: None,
        }
    }

    /// CP-001: end-to-end company scenario from a Sunday day shift
    #[test]
    fn test_cp_001_company_sunday_day_shift() {
        // 2024-03-10 is a Sunday; company rules ignore that.
        let breakdown = compute_payroll(
            datetime("2024-03-10 09:00:00"),
            datetime("2024-03-10 17:30:00"),
            &company_rules(),
            true,
            Some(dec("25.00")),
            Some(Decimal::ZERO),
        )
        .unwrap();

        // 8.5 gross -> 30 min break -> 8.0 net -> all regular
        assert_eq!(breakdown.net_total_hours, dec("8.0"));
        assert_eq!(breakdown.regular_hours, dec("8.0"));
        assert_eq!(breakdown.overtime_hours, Decimal::ZERO);
        assert_eq!(breakdown.break_duration_minutes, 30);
        assert_eq!(breakdown.rounded().total_pay, dec("200.00"));
        assert!(!breakdown.low_confidence);
    }

    /// CP-002: union Sunday shift is entirely overtime
    #[test]
    fn test_cp_002_union_sunday_all_overtime() {
        let breakdown = compute_payroll(
            datetime("2024-03-10 10:00:00"),
            datetime("2024-03-10 15:00:00"),
            &union_rules(),
            true,
            Some(dec("20.00")),
            Some(Decimal::ZERO),
        )
        .unwrap();

        assert_eq!(breakdown.regular_hours, Decimal::ZERO);
        assert_eq!(breakdown.overtime_hours, dec("5"));
        // 5 * 20 * 1.5 = 150
        assert_eq!(breakdown.rounded().total_pay, dec("150.00"));
    }

    /// CP-003: invalid interval is rejected
    #[test]
    fn test_cp_003_invalid_interval_rejected() {
        let err = compute_payroll(
            datetime("2024-03-10 17:00:00"),
            datetime("2024-03-10 09:00:00"),
            &company_rules(),
            true,
            Some(dec("25.00")),
            None,
        )
        .unwrap_err();

        assert!(matches!(err, EngineError::InvalidInterval { .. }));
    }

    /// CP-004: zero-length interval is rejected
    #[test]
    fn test_cp_004_zero_length_interval_rejected() {
        let at = datetime("2024-03-10 09:00:00");
        let err = compute_payroll(at, at, &company_rules(), true, None, None).unwrap_err();

        assert!(matches!(err, EngineError::InvalidInterval { .. }));
    }

    /// CP-005: missing rate defaults to zero and flags low confidence
    #[test]
    fn test_cp_005_missing_rate_low_confidence() {
        let breakdown = compute_payroll(
            datetime("2024-03-11 09:00:00"),
            datetime("2024-03-11 17:00:00"),
            &company_rules(),
            false,
            None,
            None,
        )
        .unwrap();

        assert_eq!(breakdown.total_pay, Decimal::ZERO);
        assert!(breakdown.low_confidence);
        assert!(
            breakdown
                .audit_trace
                .warnings
                .iter()
                .any(|w| w.code == "MISSING_RATE")
        );
    }

    /// CP-006: reimbursement is added verbatim
    #[test]
    fn test_cp_006_reimbursement_added() {
        let breakdown = compute_payroll(
            datetime("2024-03-11 09:00:00"),
            datetime("2024-03-11 19:00:00"),
            &company_rules(),
            false,
            Some(dec("20.00")),
            Some(dec("15.00")),
        )
        .unwrap();

        // 10 gross -> 9.5 net -> 8 regular + 1.5 overtime
        // (8 * 20) + (1.5 * 20 * 1.5) + 15 = 160 + 45 + 15 = 220
        assert_eq!(breakdown.regular_hours, dec("8"));
        assert_eq!(breakdown.overtime_hours, dec("1.5"));
        assert_eq!(breakdown.rounded().total_pay, dec("220.00"));
    }

    /// CP-007: overnight shift picks up night-premium hours
    #[test]
    fn test_cp_007_overnight_shift_night_hours() {
        let breakdown = compute_payroll(
            datetime("2024-03-08 22:00:00"),
            datetime("2024-03-09 06:00:00"),
            &company_rules(),
            false,
            Some(dec("20.00")),
            Some(Decimal::ZERO),
        )
        .unwrap();

        // 8 gross -> 7.5 net; raw window overlap is 8h, capped at net
        assert_eq!(breakdown.net_total_hours, dec("7.5"));
        assert_eq!(breakdown.night_premium_hours, dec("7.5"));
        // Night premium is informational: pay is regular hours only
        assert_eq!(breakdown.rounded().total_pay, dec("150.00"));
    }

    /// CP-008: identical inputs produce identical outputs
    #[test]
    fn test_cp_008_idempotent() {
        let run = || {
            compute_payroll(
                datetime("2024-03-10 09:00:00"),
                datetime("2024-03-10 17:30:00"),
                &company_rules(),
                true,
                Some(dec("25.00")),
                Some(dec("10.00")),
            )
            .unwrap()
        };

        assert_eq!(run(), run());
    }

    /// CP-009: invalid rules are rejected before any math
    #[test]
    fn test_cp_009_invalid_rules_rejected() {
        let mut rules = company_rules();
        rules.daily_overtime_threshold = dec("-8");

        let err = compute_payroll(
            datetime("2024-03-10 09:00:00"),
            datetime("2024-03-10 17:00:00"),
            &rules,
            false,
            Some(dec("25.00")),
            None,
        )
        .unwrap_err();

        assert!(matches!(err, EngineError::InvalidRules { .. }));
    }

    /// CP-010: negative money input is clamped and flagged
    #[test]
    fn test_cp_010_negative_rate_clamped() {
        let breakdown = compute_payroll(
            datetime("2024-03-11 09:00:00"),
            datetime("2024-03-11 17:00:00"),
            &company_rules(),
            false,
            Some(dec("-5.00")),
            Some(Decimal::ZERO),
        )
        .unwrap();

        assert_eq!(breakdown.total_pay, Decimal::ZERO);
        assert!(breakdown.low_confidence);
        assert!(
            breakdown
                .audit_trace
                .warnings
                .iter()
                .any(|w| w.code == "NEGATIVE_MONEY_INPUT")
        );
    }

    #[test]
    fn test_audit_trace_has_all_steps() {
        let breakdown = compute_payroll(
            datetime("2024-03-11 09:00:00"),
            datetime("2024-03-11 17:00:00"),
            &company_rules(),
            false,
            Some(dec("25.00")),
            Some(Decimal::ZERO),
        )
        .unwrap();

        let rule_ids: Vec<&str> = breakdown
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec!["auto_break", "overtime_split", "night_premium", "pay_total"]
        );
    }

    #[test]
    fn test_regular_plus_overtime_equals_net() {
        let breakdown = compute_payroll(
            datetime("2024-03-11 08:13:00"),
            datetime("2024-03-11 19:47:00"),
            &company_rules(),
            false,
            Some(dec("21.75")),
            None,
        )
        .unwrap();

        assert_eq!(breakdown.worked_hours_check(), breakdown.net_total_hours);
    }

    #[test]
    fn test_sub_minute_precision_retained() {
        // 6h36s gross is 6.01 hours: just over the break threshold.
        let breakdown = compute_payroll(
            datetime("2024-03-11 09:00:00"),
            datetime("2024-03-11 15:00:36"),
            &company_rules(),
            false,
            Some(dec("20.00")),
            Some(Decimal::ZERO),
        )
        .unwrap();

        assert_eq!(breakdown.break_duration_minutes, 30);
        assert_eq!(breakdown.rounded().net_total_hours, dec("5.51"));
    }
}

//! Pay total calculation.
//!
//! Combines the regular/overtime hour split with the effective hourly rate
//! and any reimbursement into the dollar total for the timecard.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Overtime pay multiplier. Fixed, not configurable.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The result of the pay calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayResult {
    /// Total pay owed: regular + overtime at 1.5x + reimbursement.
    pub total_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the pay total for a split of worked hours.
///
/// `total_pay = regular * rate + overtime * rate * 1.5 + reimbursement`.
/// The reimbursement is added verbatim; it is not hour-scaled. Night-premium
/// hours do not appear here: they are an informational tag and never affect
/// pay.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::calculate_total_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_total_pay(
///     Decimal::from_str("8").unwrap(),
///     Decimal::from_str("2").unwrap(),
///     Decimal::from_str("20").unwrap(),
///     Decimal::from_str("15").unwrap(),
///     1,
/// );
/// assert_eq!(result.total_pay, Decimal::from_str("235.0").unwrap());
/// ```
pub fn calculate_total_pay(
    regular_hours: Decimal,
    overtime_hours: Decimal,
    hourly_rate: Decimal,
    reimbursement: Decimal,
    step_number: u32,
) -> PayResult {
    let regular_pay = regular_hours * hourly_rate;
    let overtime_pay = overtime_hours * hourly_rate * OVERTIME_MULTIPLIER;
    let total_pay = regular_pay + overtime_pay + reimbursement;

    let audit_step = AuditStep {
        step_number,
        rule_id: "pay_total".to_string(),
        rule_name: "Pay Total".to_string(),
        input: serde_json::json!({
            "regular_hours": regular_hours.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string(),
            "reimbursement": reimbursement.normalize().to_string()
        }),
        output: serde_json::json!({
            "regular_pay": regular_pay.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string(),
            "total_pay": total_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{} regular hours at ${} plus {} overtime hours at {}x plus ${} reimbursement",
            regular_hours.normalize(),
            hourly_rate.normalize(),
            overtime_hours.normalize(),
            OVERTIME_MULTIPLIER.normalize(),
            reimbursement.normalize()
        ),
    };

    PayResult {
        total_pay,
        audit_step,
    }
}
